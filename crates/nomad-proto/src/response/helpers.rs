//! Wire value, log category and `Display` for [`Response`].

use super::Response;

impl Response {
    /// Wire value.
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Coarse class of the numeric, recorded on every written line.
    pub fn category(&self) -> &'static str {
        match self.code() {
            0..=99 => "registration",
            200..=399 => "reply",
            400..=599 => "error",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

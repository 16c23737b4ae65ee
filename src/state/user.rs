//! User mode flags.

/// User modes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserModes {
    pub invisible: bool,  // +i
    pub wallops: bool,    // +w
    pub oper: bool,       // +o (IRC operator)
    pub restricted: bool, // +r (restricted connection)
}

impl UserModes {
    /// Mode letters advertised in RPL_MYINFO.
    pub const SUPPORTED: &'static str = "iorw";

    /// Convert modes to a string like "+iw".
    pub fn as_mode_string(&self) -> String {
        let mut s = String::from("+");
        if self.invisible {
            s.push('i');
        }
        if self.wallops {
            s.push('w');
        }
        if self.oper {
            s.push('o');
        }
        if self.restricted {
            s.push('r');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_modes_render_as_plus() {
        assert_eq!(UserModes::default().as_mode_string(), "+");
    }

    #[test]
    fn modes_render_in_fixed_order() {
        let modes = UserModes {
            invisible: true,
            wallops: false,
            oper: true,
            restricted: true,
        };
        assert_eq!(modes.as_mode_string(), "+ior");
    }

    #[test]
    fn every_rendered_flag_is_supported() {
        let modes = UserModes {
            invisible: true,
            wallops: true,
            oper: true,
            restricted: true,
        };
        for flag in modes.as_mode_string().chars().skip(1) {
            assert!(UserModes::SUPPORTED.contains(flag));
        }
    }
}

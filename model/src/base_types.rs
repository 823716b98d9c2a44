use derive_more::Display;

use crate::utilities::CopyStr;

pub type NodeId = CopyStr<32>;
pub type RouteId = CopyStr<32>;
pub type ServiceId = CopyStr<32>;
pub type TripId = CopyStr<32>;

pub type Minutes = f64;
pub type KiloMeter = f64;
pub type Grams = f64;

/// Transportation category of an edge. `Link` is the synthetic zero-emission
/// connector between the member stops of a multimodal hub.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[display(fmt = "WALK")]
    Walk,
    #[display(fmt = "BUS")]
    Bus,
    #[display(fmt = "METRO")]
    Metro,
    #[display(fmt = "LINK")]
    Link,
}

impl Mode {
    /// Walk and link edges are traversable on every date, independent of the
    /// active service filter.
    pub fn is_always_available(&self) -> bool {
        matches!(self, Mode::Walk | Mode::Link)
    }

    pub fn parse(string: &str) -> Result<Mode, String> {
        match string.to_uppercase().as_str() {
            "WALK" => Ok(Mode::Walk),
            "BUS" => Ok(Mode::Bus),
            "METRO" => Ok(Mode::Metro),
            "LINK" => Ok(Mode::Link),
            _ => Err(format!("unknown mode: {}", string)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!(Mode::parse("walk").unwrap(), Mode::Walk);
        assert_eq!(Mode::parse("Bus").unwrap(), Mode::Bus);
        assert_eq!(Mode::parse("METRO").unwrap(), Mode::Metro);
        assert_eq!(Mode::parse("link").unwrap(), Mode::Link);
        assert!(Mode::parse("tram").is_err());
    }

    #[test]
    fn only_walk_and_link_are_always_available() {
        assert!(Mode::Walk.is_always_available());
        assert!(Mode::Link.is_always_available());
        assert!(!Mode::Bus.is_always_available());
        assert!(!Mode::Metro.is_always_available());
    }
}

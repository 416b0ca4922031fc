use super::*;
use crate::Chips;

/// Betting limits of a session. Every bet placed is the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stakes {
    min: Chips,
    max: Chips,
}

impl Stakes {
    pub fn new(min: Chips, max: Chips) -> Result<Self, Fault> {
        match (min, max) {
            (0, _) => Err(Fault::Config("minimum bet must be positive".to_string())),
            (min, max) if min > max => Err(Fault::Config(format!(
                "minimum bet {} exceeds maximum {}",
                min, max
            ))),
            (min, max) => Ok(Self { min, max }),
        }
    }
    pub fn min(&self) -> Chips {
        self.min
    }
    pub fn max(&self) -> Chips {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn validates_limits() {
        assert!(Stakes::new(10, 500).is_ok());
        assert!(Stakes::new(10, 10).is_ok());
        let stakes = Stakes::new(10, 500).unwrap();
        assert_eq!((stakes.min(), stakes.max()), (10, 500));
        assert!(matches!(Stakes::new(0, 500), Err(Fault::Config(_))));
        assert!(matches!(Stakes::new(600, 500), Err(Fault::Config(_))));
    }
}

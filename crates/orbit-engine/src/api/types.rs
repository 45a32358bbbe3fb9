use std::fmt;

/// Unique identifier for a sprite in the sandbox.
/// Sprites are tracked by identity: two sprites with identical
/// position, radius and color are still distinct members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_number() {
        assert_eq!(SpriteId(7).to_string(), "sprite#7");
    }
}

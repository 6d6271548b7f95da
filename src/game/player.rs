/// Identity of one of the two contestants.
///
/// This is what grid cells and the turn tracker store. Comparing sides is
/// how the rules tell the players apart; display attributes live on
/// [`Player`] and take no part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Index into per-side storage (`players[side.index()]`)
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// 1-based number for display
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// A contestant record.
///
/// The color is a display attribute for the presentation layer; the game
/// rules never read it. Two players may share a color and still remain
/// distinct contestants, because every piece and turn is attributed to a
/// [`Side`], not to these attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: String,
}

impl Player {
    pub fn new(color: impl Into<String>) -> Self {
        Player {
            color: color.into(),
        }
    }

    /// Display color name, opaque to the game rules
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::One.other(), Side::Two);
        assert_eq!(Side::Two.other(), Side::One);
    }

    #[test]
    fn test_side_numbering() {
        assert_eq!(Side::One.index(), 0);
        assert_eq!(Side::Two.index(), 1);
        assert_eq!(Side::One.number(), 1);
        assert_eq!(Side::Two.number(), 2);
    }

    #[test]
    fn test_player_color() {
        let player = Player::new("magenta");
        assert_eq!(player.color(), "magenta");
    }
}

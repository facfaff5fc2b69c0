/// Direction of an arrow-key step through the tab list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Maps a `KeyboardEvent.key` value to a direction.
    /// Only the horizontal arrow keys navigate.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    pub fn offset(&self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Index reached by stepping once from `current`, wrapping at both ends:
/// `(current + direction + count) mod count`.
///
/// `count` must be non-zero and `current < count`.
pub fn circular_index(current: usize, direction: Direction, count: usize) -> usize {
    debug_assert!(count > 0 && current < count);
    let count = count as isize;
    ((current as isize + direction.offset() + count) % count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_wraps_forward_from_last() {
        assert_eq!(circular_index(2, Direction::Next, 3), 0);
    }

    #[test]
    fn test_wraps_backward_from_first() {
        assert_eq!(circular_index(0, Direction::Previous, 3), 2);
    }

    #[test]
    fn test_steps_inside_range() {
        assert_eq!(circular_index(0, Direction::Next, 3), 1);
        assert_eq!(circular_index(2, Direction::Previous, 3), 1);
    }

    #[test]
    fn test_single_tab_stays_put() {
        assert_eq!(circular_index(0, Direction::Next, 1), 0);
        assert_eq!(circular_index(0, Direction::Previous, 1), 0);
    }
}

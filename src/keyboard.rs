//! Physical en-US keyboard layout used by the keyboard-distance metric.
//!
//! Each row of the layout is a string; the column index of a character is
//! its x coordinate and the row index its y coordinate. Characters that do
//! not appear anywhere in the table (uppercase letters, whitespace,
//! anything non-ASCII) have no position and contribute nothing to any
//! distance computed over them.

const KEY_ROWS: [&str; 4] = [
    "1!2@3#4$5%6^7&8*9(0)-_=+",
    r#"qwertyuiop{[}]\|"#,
    "asdfghjkl;:\"'",
    "zxcvbnm,<.>/?",
];

/// (x, y) position of a key, or `None` for characters not on the layout.
pub(crate) fn key_position(ch: char) -> Option<(f64, f64)> {
    for (y, row) in KEY_ROWS.iter().enumerate() {
        if let Some(x) = row.chars().position(|c| c == ch) {
            return Some((x as f64, y as f64));
        }
    }
    None
}

/// Euclidean distance between two keys, `None` if either is off the layout.
pub(crate) fn key_distance(a: char, b: char) -> Option<f64> {
    let (ax, ay) = key_position(a)?;
    let (bx, by) = key_position(b)?;
    Some(((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_position_rows() {
        assert_eq!(key_position('q'), Some((0.0, 1.0)));
        assert_eq!(key_position('a'), Some((0.0, 2.0)));
        assert_eq!(key_position('z'), Some((0.0, 3.0)));
        assert_eq!(key_position('p'), Some((9.0, 1.0)));
    }

    #[test]
    fn test_key_position_absent() {
        assert_eq!(key_position(' '), None);
        assert_eq!(key_position('Q'), None);
        assert_eq!(key_position('é'), None);
    }

    #[test]
    fn test_key_distance_neighbors() {
        // q and w sit next to each other on the same row
        assert_eq!(key_distance('q', 'w'), Some(1.0));
        assert_eq!(key_distance('o', 'p'), Some(1.0));
        assert_eq!(key_distance('x', 'x'), Some(0.0));
    }

    #[test]
    fn test_key_distance_across_rows() {
        // q (0,1) -> z (0,3)
        assert_eq!(key_distance('q', 'z'), Some(2.0));
        let d = key_distance('q', 'x').unwrap();
        assert!((d - (1.0f64 + 4.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_key_distance_symmetric() {
        for (a, b) in [('q', 'm'), ('a', 'l'), ('5', 't')] {
            assert_eq!(key_distance(a, b), key_distance(b, a));
        }
    }

    #[test]
    fn test_key_distance_off_layout() {
        assert_eq!(key_distance('q', ' '), None);
        assert_eq!(key_distance(' ', 'q'), None);
    }
}

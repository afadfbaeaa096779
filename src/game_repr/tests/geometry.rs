use super::*;

// ==================== LINE CONSTRUCTION TESTS ====================

#[test]
fn test_line_between_vertical() {
    let line = line_between(sq(0, 1), sq(4, 1)).unwrap();
    assert_eq!(line.as_slice(), &[sq(1, 1), sq(2, 1), sq(3, 1)]);
}

#[test]
fn test_line_between_horizontal_backwards() {
    let line = line_between(sq(2, 3), sq(2, 0)).unwrap();
    assert_eq!(line.as_slice(), &[sq(2, 2), sq(2, 1)]);
}

#[test]
fn test_line_between_diagonal() {
    let line = line_between(sq(4, 0), sq(1, 3)).unwrap();
    assert_eq!(line.as_slice(), &[sq(3, 1), sq(2, 2)]);
}

#[test]
fn test_line_between_adjacent_is_empty() {
    assert!(line_between(sq(1, 1), sq(2, 2)).unwrap().is_empty());
}

#[test]
fn test_misaligned_points_fail() {
    assert!(matches!(
        line_between(sq(0, 0), sq(1, 2)),
        Err(Error::Misaligned { .. })
    ));
    assert!(matches!(check_line(sq(4, 0), sq(2, 3)), Err(Error::Misaligned { .. })));
    assert!(matches!(pin_line(sq(3, 3), sq(3, 3)), Err(Error::Misaligned { .. })));
}

#[test]
fn test_check_and_pin_lines_include_attacker() {
    let check = check_line(sq(4, 0), sq(0, 0)).unwrap();
    assert_eq!(check.as_slice(), &[sq(3, 0), sq(2, 0), sq(1, 0), sq(0, 0)]);

    let pin = pin_line(sq(0, 2), sq(0, 3)).unwrap();
    assert_eq!(pin.as_slice(), &[sq(0, 3)]);
}

#[test]
fn test_axis_of_direction() {
    assert_eq!(Axis::of((1, 0)), Axis::Vertical);
    assert_eq!(Axis::of((0, -1)), Axis::Horizontal);
    assert_eq!(Axis::of((-1, 1)), Axis::Diagonal);
}

#[test]
fn test_slider_axes() {
    assert!(Type::Rook.slides_along(Axis::Vertical));
    assert!(!Type::Rook.slides_along(Axis::Diagonal));
    assert!(Type::Bishop.slides_along(Axis::Diagonal));
    assert!(!Type::Bishop.slides_along(Axis::Horizontal));
    assert!(Type::Queen.slides_along(Axis::Horizontal));
    assert!(Type::Queen.slides_along(Axis::Diagonal));
    assert!(!Type::King.slides_along(Axis::Vertical));
    assert!(!Type::Knight.slides_along(Axis::Diagonal));
}

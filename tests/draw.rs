use enough::Unstoppable;
use zenpbm::*;

fn count(b: &Bitmap) -> usize {
    b.pixels().iter().filter(|&&p| p).count()
}

#[test]
fn line_endpoints_and_diagonal() {
    let mut b = Bitmap::new(5, 5).unwrap();
    b.draw_line(Point::new(0, 0), Point::new(4, 4), true);
    for i in 0..5 {
        assert_eq!(b.get(i, i), Some(true));
    }
    assert_eq!(count(&b), 5);
}

#[test]
fn line_is_symmetric_in_endpoint_order() {
    let mut a = Graymap::new(9, 5).unwrap();
    let mut b = Graymap::new(9, 5).unwrap();
    a.draw_line(Point::new(0, 0), Point::new(8, 4), 200);
    b.draw_line(Point::new(8, 4), Point::new(0, 0), 200);
    assert_eq!(a.get(0, 0), Some(200));
    assert_eq!(a.get(8, 4), Some(200));
    assert_eq!(b.get(0, 0), Some(200));
    assert_eq!(b.get(8, 4), Some(200));
}

#[test]
fn rectangle_outline_and_fill() {
    let mut outline = Bitmap::new(6, 5).unwrap();
    outline.draw_rectangle(Point::new(1, 1), 4, 3, true);
    let mut filled = Bitmap::new(6, 5).unwrap();
    filled.draw_filled_rectangle(Point::new(1, 1), 4, 3, true);

    assert_eq!(count(&filled), 12);
    assert_eq!(count(&outline), 10);
    assert_eq!(outline.get(2, 2), Some(false));
    assert_eq!(filled.get(2, 2), Some(true));

    let mut empty = Bitmap::new(3, 3).unwrap();
    empty.draw_filled_rectangle(Point::new(0, 0), 0, 3, true);
    assert_eq!(count(&empty), 0);
}

#[test]
fn circle_matches_filled_circle() {
    let mut a = Pixmap::new(11, 11).unwrap();
    let mut b = Pixmap::new(11, 11).unwrap();
    let red = RGB8::new(255, 0, 0);
    a.draw_circle(Point::new(5, 5), 4, red);
    b.draw_filled_circle(Point::new(5, 5), 4, red);
    assert_eq!(a, b);
    assert_eq!(a.get(5, 5), Some(red));
    assert_eq!(a.get(9, 5), Some(red));
    assert_eq!(a.get(0, 0), Some(RGB8::new(0, 0, 0)));
}

#[test]
fn filled_triangle_covers_vertices_and_interior() {
    let (p1, p2, p3) = (Point::new(1, 1), Point::new(8, 3), Point::new(3, 8));
    let mut outline = Bitmap::new(10, 10).unwrap();
    outline.draw_triangle(p1, p2, p3, true);
    let mut filled = Bitmap::new(10, 10).unwrap();
    filled.draw_filled_triangle(p1, p2, p3, true);

    for p in [p1, p2, p3] {
        assert_eq!(outline.get(p.x as u32, p.y as u32), Some(true));
        assert_eq!(filled.get(p.x as u32, p.y as u32), Some(true));
    }
    assert!(count(&filled) > count(&outline));
    assert_eq!(outline.get(4, 4), Some(false));
    assert_eq!(filled.get(4, 4), Some(true));
}

#[test]
fn polygon_validation() {
    let mut g = Graymap::new(4, 4).unwrap();
    assert!(matches!(
        g.draw_polygon(&[], 1),
        Err(PnmError::InvalidPolygon(_))
    ));
    assert!(matches!(
        g.draw_filled_polygon(&[Point::new(0, 0), Point::new(3, 3)], 1),
        Err(PnmError::InvalidPolygon(_))
    ));
    let below = [Point::new(0, 0), Point::new(3, 0), Point::new(1, 4)];
    assert!(matches!(
        g.draw_filled_polygon(&below, 1),
        Err(PnmError::InvalidPolygon(_))
    ));
    assert!(g.pixels().iter().all(|&p| p == 0));
}

#[test]
fn filled_square_polygon_equals_filled_rectangle() {
    let square = [
        Point::new(1, 1),
        Point::new(5, 1),
        Point::new(5, 4),
        Point::new(1, 4),
    ];
    let mut poly = Bitmap::new(7, 6).unwrap();
    poly.draw_filled_polygon(&square, true).unwrap();
    let mut rect = Bitmap::new(7, 6).unwrap();
    rect.draw_filled_rectangle(Point::new(1, 1), 5, 4, true);
    assert_eq!(poly, rect);
}

#[test]
fn drawing_survives_encode() {
    let mut canvas = Pixmap::new(16, 16).unwrap();
    canvas.set_format(NetpbmFormat::PpmBinary).unwrap();
    canvas.draw_filled_circle(Point::new(8, 8), 5, RGB8::new(0, 255, 0));
    canvas.draw_line(Point::new(0, 15), Point::new(15, 0), RGB8::new(255, 255, 255));

    let bytes = encode(&canvas, Unstoppable).unwrap();
    let back: Pixmap = DecodeRequest::new(&bytes).decode_as(Unstoppable).unwrap();
    assert_eq!(back, canvas);
}

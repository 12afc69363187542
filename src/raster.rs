// Software rasterizers for the shapes the engine draws.
//
// Every primitive is generic over a `plot(x, y)` callback so the same
// geometry writes to either target: the u8 canvas mask or the u32 frame
// buffer. Bounds checking belongs to the plot callback, not to geometry.

use crate::types::Point;

/// One drawing operation, either previewed on the live frame or committed
/// to the canvas. `Disk` is the eraser footprint (and the only filled op).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Line { from: Point, to: Point },
    Rect { a: Point, b: Point },
    Circle { center: Point, radius: i32 },
    Disk { center: Point, radius: i32 },
}

/// Rasterize `op`, calling `plot` once per covered pixel.
///
/// `thickness` widens outline ops (Line/Rect/Circle) by stamping a small
/// filled disk at each rasterized point; `Disk` is already filled and
/// ignores it. Pixels may be plotted more than once where stamps overlap.
pub fn plot_op(op: &DrawOp, thickness: i32, mut plot: impl FnMut(i32, i32)) {
    let pen = (thickness.max(1) - 1) / 2; // stamp radius; thickness 1 = single pixel
    let mut stamp = |x: i32, y: i32| {
        if pen == 0 {
            plot(x, y);
            return;
        }
        for dy in -pen..=pen {
            for dx in -pen..=pen {
                if dx * dx + dy * dy <= pen * pen {
                    plot(x + dx, y + dy);
                }
            }
        }
    };

    match *op {
        DrawOp::Line { from, to } => line(from, to, &mut stamp),
        DrawOp::Rect { a, b } => {
            let (ax, bx) = (a.x.min(b.x), a.x.max(b.x));
            let (ay, by) = (a.y.min(b.y), a.y.max(b.y));
            line(Point::new(ax, ay), Point::new(bx, ay), &mut stamp);
            line(Point::new(bx, ay), Point::new(bx, by), &mut stamp);
            line(Point::new(bx, by), Point::new(ax, by), &mut stamp);
            line(Point::new(ax, by), Point::new(ax, ay), &mut stamp);
        }
        DrawOp::Circle { center, radius } => circle(center, radius, &mut stamp),
        DrawOp::Disk { center, radius } => disk(center, radius, &mut plot),
    }
}

/// Bresenham line between two points, endpoints included.
fn line(from: Point, to: Point, plot: &mut impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (from.x, from.y);
    let (x1, y1) = (to.x, to.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Midpoint circle outline. Radius 0 degenerates to the center pixel.
fn circle(center: Point, radius: i32, plot: &mut impl FnMut(i32, i32)) {
    if radius <= 0 {
        plot(center.x, center.y);
        return;
    }
    let (cx, cy) = (center.x, center.y);
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        plot(cx + x, cy + y);
        plot(cx + y, cy + x);
        plot(cx - y, cy + x);
        plot(cx - x, cy + y);
        plot(cx - x, cy - y);
        plot(cx - y, cy - x);
        plot(cx + y, cy - x);
        plot(cx + x, cy - y);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Filled disk, row by row.
fn disk(center: Point, radius: i32, plot: &mut impl FnMut(i32, i32)) {
    let r = radius.max(0);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                plot(center.x + dx, center.y + dy);
            }
        }
    }
}

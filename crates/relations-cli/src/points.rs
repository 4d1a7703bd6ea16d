//! Small point sets used to demonstrate levelling of a partial order.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `a` is below `b` in both coordinates.
pub fn dominated(a: &Point, b: &Point) -> bool {
    a.x <= b.x && a.y <= b.y
}

/// Every integer point of the square `[left, right]²`, top row first.
pub fn grid(left: i64, right: i64) -> Result<Vec<Point>, &'static str> {
    if left > right {
        return Err("right must be at least left");
    }
    let mut points = Vec::new();
    for y in (left..=right).rev() {
        for x in left..=right {
            points.push(Point { x, y });
        }
    }
    Ok(points)
}

/// A plus-shaped set: the full middle row, shorter rows above and below it,
/// and one point at each vertical tip.
///
/// The tips sit at `y = left` and `y = right`, so they must lie beyond the
/// rows at `y = ±1`; otherwise the set would hold the same point twice.
pub fn cross(left: i64, right: i64) -> Result<Vec<Point>, &'static str> {
    if left > right {
        return Err("right must be at least left");
    }
    if left > -2 || right < 2 {
        return Err("cross needs left <= -2 and right >= 2");
    }
    let mut points = vec![Point { x: 0, y: left }];
    points.extend((left + 1..right).map(|x| Point { x, y: 1 }));
    points.extend((left..=right).map(|x| Point { x, y: 0 }));
    points.extend((left + 1..right).map(|x| Point { x, y: -1 }));
    points.push(Point { x: 0, y: right });
    Ok(points)
}

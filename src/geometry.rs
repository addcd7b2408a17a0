use crate::math::gcd;
use itertools::Itertools;
use std::ops::{Add, Mul, Neg, Sub};

/// 実数幾何の許容誤差
pub const EPS: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[allow(dead_code)]
impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn cross(&self, other: Point) -> i64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: Point) -> i64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm2(&self) -> i64 {
        self.dot(*self)
    }

    /// 向きを区別しない方向ベクトルの代表元
    ///
    /// gcdで割り、(x > 0) または (x == 0 かつ y > 0) に揃える
    pub fn normalized_direction(&self) -> Point {
        let g = gcd(self.x.unsigned_abs(), self.y.unsigned_abs()) as i64;

        if g == 0 {
            return *self;
        }

        let p = Point::new(self.x / g, self.y / g);

        if p.x < 0 || (p.x == 0 && p.y < 0) {
            -p
        } else {
            p
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

pub fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    (b - a).cross(c - a) == 0
}

/// 閉線分 ab と cd が共有点を持つか
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = (b - a).cross(c - a).signum();
    let d2 = (b - a).cross(d - a).signum();
    let d3 = (d - c).cross(a - c).signum();
    let d4 = (d - c).cross(b - c).signum();

    if d1 == 0 && d2 == 0 {
        // 同一直線上なら射影した区間の重なりを見る
        let (lo1, hi1) = (a.min(b), a.max(b));
        let (lo2, hi2) = (c.min(d), c.max(d));
        return lo1 <= hi2 && lo2 <= hi1;
    }

    d1 * d2 <= 0 && d3 * d4 <= 0
}

/// 直線 p + t(q - p) が単純多角形の内部 (境界を含む) を通る長さ
///
/// 頂点を直線のどちら側にあるかで符号付けし、符号の変化点を t で整列して
/// 内外の切り替わりを数える。多角形の辺と重なる部分も長さに含める
pub fn chord_length(polygon: &[Point], p: Point, q: Point) -> f64 {
    let dir = q - p;
    let side = |v: Point| dir.cross(v - p).signum();

    let Some(&last) = polygon.last() else {
        return 0.0;
    };

    let mut crossings = vec![];
    let mut prev = last;
    let mut prev_side = side(last);

    for &v in polygon.iter() {
        let s = side(v);

        if s != prev_side {
            // 辺 prev -> v と直線の交点のパラメータ
            let edge = v - prev;
            let t = (v - p).cross(edge) as f64 / dir.cross(edge) as f64;
            crossings.push((t, prev_side - s));
        }

        prev = v;
        prev_side = s;
    }

    let crossings = crossings
        .into_iter()
        .sorted_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal))
        .collect_vec();

    let mut winding = 0;
    let mut length = 0.0;

    for (i, &(t, change)) in crossings.iter().enumerate() {
        if winding != 0 && i > 0 {
            length += t - crossings[i - 1].0;
        }

        winding += change;
    }

    length * (dir.x as f64).hypot(dir.y as f64)
}

/// ax + by + c = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Line {
    pub const fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    /// 点が直線のどちら側にあるか (-1, 0, 1)
    pub fn side(&self, p: Point) -> i64 {
        (self.a * p.x + self.b * p.y + self.c).signum()
    }
}

/// 実数座標の点・ベクトル
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn cross(&self, other: PointF) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: PointF) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        PointF::new(p.x as f64, p.y as f64)
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> Self::Output {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;

    fn sub(self, rhs: PointF) -> Self::Output {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for PointF {
    type Output = PointF;

    fn mul(self, rhs: f64) -> Self::Output {
        PointF::new(self.x * rhs, self.y * rhs)
    }
}

/// 実数座標の線分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentF {
    pub a: PointF,
    pub b: PointF,
}

impl SegmentF {
    pub fn new(a: impl Into<PointF>, b: impl Into<PointF>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn direction(&self) -> PointF {
        self.b - self.a
    }

    /// 直線 ab からの符号付き距離 (左側が正)
    pub fn signed_distance(&self, p: PointF) -> f64 {
        let dir = self.direction();
        dir.cross(p - self.a) / dir.norm()
    }

    /// -1, 0, 1 で直線のどちら側か
    pub fn side(&self, p: PointF) -> i32 {
        let d = self.signed_distance(p);

        if d > EPS {
            1
        } else if d < -EPS {
            -1
        } else {
            0
        }
    }

    pub fn is_parallel(&self, other: &SegmentF) -> bool {
        let (u, v) = (self.direction(), other.direction());
        u.cross(v).abs() <= EPS * u.norm() * v.norm()
    }

    /// 点が線分上 (端点を含む) にあるか
    pub fn contains(&self, p: PointF) -> bool {
        self.side(p) == 0 && (p - self.a).dot(p - self.b) <= EPS * self.direction().norm()
    }

    /// 閉線分どうしが共有点を持つか
    pub fn intersects(&self, other: &SegmentF) -> bool {
        let s1 = self.side(other.a) * self.side(other.b);
        let s2 = other.side(self.a) * other.side(self.b);

        if self.side(other.a) == 0 && self.side(other.b) == 0 {
            return self.contains(other.a)
                || self.contains(other.b)
                || other.contains(self.a)
                || other.contains(self.b);
        }

        s1 <= 0 && s2 <= 0
    }

    /// 2直線の交点。平行ならNone
    pub fn line_intersection(&self, other: &SegmentF) -> Option<PointF> {
        if self.is_parallel(other) {
            return None;
        }

        let (u, v) = (self.direction(), other.direction());
        let t = (other.a - self.a).cross(v) / u.cross(v);
        Some(self.a + u * t)
    }

    /// 直線 ab に関して p を折り返す
    pub fn reflect(&self, p: PointF) -> PointF {
        let dir = self.direction();
        let foot = self.a + dir * ((p - self.a).dot(dir) / dir.dot(dir));
        foot * 2.0 - p
    }
}

#[cfg(test)]
mod test {
    use super::{
        chord_length, is_collinear, segments_intersect, Line, Point, PointF, SegmentF,
    };
    use crate::common::approx_eq;

    #[test]
    fn vector_ops() {
        let a = Point::new(1, 2);
        let b = Point::new(3, -1);
        assert_eq!(Point::new(4, 1), a + b);
        assert_eq!(Point::new(-2, 3), a - b);
        assert_eq!(-7, a.cross(b));
        assert_eq!(1, a.dot(b));
        assert_eq!(5, a.norm2());
        assert_eq!(Point::new(3, 6), a * 3);
        assert_eq!("1 2", a.to_string());
    }

    #[test]
    fn direction() {
        assert_eq!(Point::new(1, -2), Point::new(-3, 6).normalized_direction());
        assert_eq!(Point::new(0, 1), Point::new(0, -5).normalized_direction());
        assert_eq!(Point::new(1, 0), Point::new(7, 0).normalized_direction());
    }

    #[test]
    fn lines() {
        assert!(is_collinear(Point::new(0, 0), Point::new(1, 1), Point::new(3, 3)));
        assert!(!is_collinear(Point::new(0, 0), Point::new(1, 1), Point::new(3, 2)));

        let line = Line::new(1, 1, -3);
        assert_eq!(-1, line.side(Point::new(1, 1)));
        assert_eq!(1, line.side(Point::new(2, 2)));
        assert_eq!(0, line.side(Point::new(3, 0)));
    }

    #[test]
    fn integer_segments() {
        let p = Point::new;
        assert!(segments_intersect(p(0, 0), p(2, 2), p(0, 2), p(2, 0)));
        assert!(segments_intersect(p(0, 0), p(2, 2), p(2, 2), p(3, 0)));
        assert!(!segments_intersect(p(0, 0), p(1, 1), p(2, 2), p(3, 3)));
        assert!(segments_intersect(p(0, 0), p(2, 2), p(1, 1), p(3, 3)));
        assert!(!segments_intersect(p(0, 0), p(1, 0), p(0, 1), p(1, 1)));
        // 延長線上の交点は含まない
        assert!(!segments_intersect(p(0, 0), p(1, 1), p(3, 0), p(2, 1)));
    }

    #[test]
    fn chord_through_square() {
        let square = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];

        let diagonal = chord_length(&square, Point::new(0, 0), Point::new(10, 10));
        assert!(approx_eq(200f64.sqrt(), diagonal, 1e-9));

        // 辺と重なる直線は辺の長さ
        let edge = chord_length(&square, Point::new(0, 0), Point::new(0, 10));
        assert!(approx_eq(10.0, edge, 1e-9));

        // 頂点に接するだけなら0
        let touch = chord_length(&square, Point::new(0, 0), Point::new(10, -10));
        assert!(approx_eq(0.0, touch, 1e-9));

        let outside = chord_length(&square, Point::new(0, 20), Point::new(1, 20));
        assert!(approx_eq(0.0, outside, 1e-9));
    }

    #[test]
    fn chord_through_concave_polygon() {
        // U字型: 上辺の直線 y = 5 は2つの腕を通る
        let u = [
            Point::new(0, 0),
            Point::new(30, 0),
            Point::new(30, 10),
            Point::new(20, 10),
            Point::new(20, 3),
            Point::new(10, 3),
            Point::new(10, 10),
            Point::new(0, 10),
        ];

        let length = chord_length(&u, Point::new(-5, 5), Point::new(0, 5));
        assert!(approx_eq(20.0, length, 1e-9));

        // 窪みの底の辺に沿う直線
        let bottom = chord_length(&u, Point::new(0, 3), Point::new(1, 3));
        assert!(approx_eq(30.0, bottom, 1e-9));
    }

    #[test]
    fn float_segments() {
        let s = SegmentF::new(Point::new(0, 0), Point::new(4, 0));
        let t = SegmentF::new(Point::new(2, -1), Point::new(2, 3));
        assert!(s.intersects(&t));
        assert_eq!(Some(PointF::new(2.0, 0.0)), s.line_intersection(&t));

        let far = SegmentF::new(Point::new(5, -1), Point::new(5, 1));
        assert!(!s.intersects(&far));

        let parallel = SegmentF::new(Point::new(0, 1), Point::new(4, 1));
        assert!(s.is_parallel(&parallel));
        assert_eq!(None, s.line_intersection(&parallel));

        let overlap = SegmentF::new(Point::new(3, 0), Point::new(6, 0));
        assert!(s.intersects(&overlap));

        assert!(s.contains(PointF::new(4.0, 0.0)));
        assert!(!s.contains(PointF::new(4.5, 0.0)));
    }

    #[test]
    fn reflection() {
        // 直線 y = x + 2 に関する折り返し
        let mirror = SegmentF::new(Point::new(-1, 1), Point::new(1, 3));
        let r = mirror.reflect(PointF::new(1.0, 1.0));
        assert!(approx_eq(-1.0, r.x, 1e-9));
        assert!(approx_eq(3.0, r.y, 1e-9));
        assert_eq!(-1, mirror.side(PointF::new(1.0, 1.0)));
        assert_eq!(1, mirror.side(r));
    }
}

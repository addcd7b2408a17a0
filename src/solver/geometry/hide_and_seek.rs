use crate::{
    geometry::{Point, PointF, SegmentF},
    problem::Judge,
};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        victor: (i64, i64),
        peter: (i64, i64),
        wall: (i64, i64, i64, i64),
        mirror: (i64, i64, i64, i64),
    }

    let victor = Point::new(victor.0, victor.1);
    let peter = Point::new(peter.0, peter.1);
    let wall = SegmentF::new(Point::new(wall.0, wall.1), Point::new(wall.2, wall.3));
    let mirror = SegmentF::new(
        Point::new(mirror.0, mirror.1),
        Point::new(mirror.2, mirror.3),
    );

    let visible = can_see(victor.into(), peter.into(), &wall, &mirror);
    judge.answer(if visible { "YES" } else { "NO" });
}

fn can_see(victor: PointF, peter: PointF, wall: &SegmentF, mirror: &SegmentF) -> bool {
    let sight = SegmentF::new(victor, peter);

    // 視線と平行な鏡は反射せず、障害物にもならない
    if !sight.intersects(wall) && (!sight.intersects(mirror) || sight.is_parallel(mirror)) {
        return true;
    }

    // 鏡で反射して見るには2人が鏡の直線の同じ側にいる必要がある
    let side = mirror.side(victor);

    if side == 0 || side != mirror.side(peter) {
        return false;
    }

    let image = mirror.reflect(peter);
    let reflected = SegmentF::new(victor, image);

    let Some(hit) = reflected.line_intersection(mirror) else {
        return false;
    };

    if !mirror.contains(hit) {
        return false;
    }

    let incoming = SegmentF::new(victor, hit);
    let outgoing = SegmentF::new(hit, peter);
    !incoming.intersects(wall) && !outgoing.intersects(wall)
}

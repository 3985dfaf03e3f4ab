//! Property tests for the collision and transform primitives.
//!
//! Coordinates are drawn from small integers so the arithmetic stays exact
//! in `f32`.

use proptest::prelude::*;

use crate::{Matrix2d, Rect, Vec2};

fn coord() -> impl Strategy<Value = f32> {
    (-200i32..200).prop_map(|v| v as f32)
}

fn extent() -> impl Strategy<Value = f32> {
    (1i32..64).prop_map(|v| v as f32)
}

fn even_extent() -> impl Strategy<Value = f32> {
    (1i32..32).prop_map(|v| (v * 2) as f32)
}

fn any_rect() -> impl Strategy<Value = Rect> {
    (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
}

fn even_rect() -> impl Strategy<Value = Rect> {
    (coord(), coord(), even_extent(), even_extent())
        .prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
}

/// Two even-sized boxes where the second is offset so that it always
/// overlaps the first.
fn overlapping_even_pair() -> impl Strategy<Value = (Rect, Rect)> {
    (even_rect(), even_extent(), even_extent()).prop_flat_map(|(a, bw, bh)| {
        let aw = a.width() as i32;
        let ah = a.height() as i32;
        let ox = (1 - bw as i32)..aw;
        let oy = (1 - bh as i32)..ah;
        (Just(a), ox, oy).prop_map(move |(a, ox, oy)| {
            let b = Rect::from_xywh(a.left() + ox as f32, a.top() + oy as f32, bw, bh);
            (a, b)
        })
    })
}

fn any_matrix() -> impl Strategy<Value = Matrix2d> {
    prop::array::uniform6(-100.0f32..100.0)
        .prop_map(|[a, b, c, d, e, f]| Matrix2d::from_values(a, b, c, d, e, f))
}

proptest! {
    #[test]
    fn prop_disjoint_boxes_have_no_response(a in any_rect(), b in any_rect()) {
        if !a.overlaps(&b) {
            prop_assert_eq!(a.collide_vs_aabb(&b), Vec2::ZERO);
        }
    }

    #[test]
    fn prop_response_separates_even_boxes((a, b) in overlapping_even_pair()) {
        prop_assert!(a.overlaps(&b));
        let p = a.collide_vs_aabb(&b);
        prop_assert!(p.x == 0.0 || p.y == 0.0);
        prop_assert_ne!(p, Vec2::ZERO);

        let mut moved = a.clone();
        moved.translate_by(p);
        prop_assert!(!moved.overlaps(&b));
    }

    #[test]
    fn prop_overlaps_is_symmetric(a in any_rect(), b in any_rect()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn prop_union_encloses_and_is_idempotent(a in any_rect(), b in any_rect()) {
        let mut u = a.clone();
        u.union(&b);
        prop_assert!(a.within(&u));
        prop_assert!(b.within(&u));
        prop_assert!(u.contains(&a));

        let mut again = u.clone();
        again.union(&b);
        prop_assert!(again.equals(&u));
    }

    #[test]
    fn prop_equals_reflexive_and_symmetric(a in any_rect(), b in any_rect()) {
        prop_assert!(a.equals(&a));
        prop_assert_eq!(a.equals(&b), b.equals(&a));
        let same_edges = a.left() == b.left()
            && a.right() == b.right()
            && a.top() == b.top()
            && a.bottom() == b.bottom();
        prop_assert_eq!(a.equals(&b), same_edges);
    }

    #[test]
    fn prop_adjust_hitbox_none_is_noop(a in any_rect()) {
        let mut adjusted = a.clone();
        adjusted.adjust_hitbox(None, None);
        prop_assert!(adjusted.equals(&a));
        prop_assert_eq!(adjusted.half_width(), a.half_width());
        prop_assert_eq!(adjusted.half_height(), a.half_height());
    }

    #[test]
    fn prop_flip_twice_restores_offset(a in any_rect(), sprite in 0i32..128, off in 0i32..16) {
        let mut r = a.clone();
        r.adjust_hitbox(Some(crate::HitboxAxis::new(off as f32, r.width())), None);
        let before = r.hitbox_offset();
        r.flip_horizontal(sprite as f32);
        r.flip_horizontal(sprite as f32);
        prop_assert_eq!(r.hitbox_offset(), before);
    }

    #[test]
    fn prop_rotate_zero_is_noop(m in any_matrix()) {
        let mut rotated = m;
        rotated.rotate(0.0);
        prop_assert_eq!(rotated, m);
    }

    #[test]
    fn prop_translate_adds_to_translation(m in any_matrix(), x in coord(), y in coord()) {
        let mut t = m;
        t.translate(x, y);
        prop_assert_eq!(t.e, m.e + x);
        prop_assert_eq!(t.f, m.f + y);
        prop_assert_eq!([t.a, t.b, t.c, t.d], [m.a, m.b, m.c, m.d]);
    }
}

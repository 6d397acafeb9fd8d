//! Collision detection and response
//!
//! Wall and paddle bounces are simple reflections; brick bounces resolve the
//! overlap on the axis of least penetration, with ties going to the Y axis.
//! That asymmetric tie-break is load-bearing: it keeps corner hits behaving
//! like the top/bottom face hits players expect, and tests depend on it.

use super::rect::Rect;
use super::state::{Ball, Paddle};
use crate::consts::{BOARD_WIDTH, BOARD_HEIGHT};

/// Reflect the ball off the side and top walls, clamping it back inside.
///
/// The bottom edge is not a wall; crossing it is a life-loss event handled
/// by the session. Returns true if any wall was hit.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    let mut hit = false;

    if ball.rect.left() <= 0.0 {
        ball.rect.pos.x = 0.0;
        ball.vel.x = ball.vel.x.abs();
        hit = true;
    } else if ball.rect.right() >= BOARD_WIDTH {
        ball.rect.pos.x = BOARD_WIDTH - ball.rect.size.x;
        ball.vel.x = -ball.vel.x.abs();
        hit = true;
    }

    if ball.rect.top() <= 0.0 {
        ball.rect.pos.y = 0.0;
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    }

    hit
}

/// Bounce the ball off the paddle.
///
/// Fires only when the boxes overlap while the ball moves downward, so a
/// ball already heading up cannot re-trigger on the next tick. The exit
/// direction depends on where the ball struck: the outer thirds of the
/// paddle force the ball outward, the middle third preserves its course.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 || !ball.rect.intersects(&paddle.rect) {
        return false;
    }

    ball.vel.y = -ball.vel.y;

    let hit_pos = ball.rect.center().x - paddle.rect.left();
    let third = paddle.rect.size.x / 3.0;
    if hit_pos < third {
        ball.vel.x = -ball.vel.x.abs();
    } else if hit_pos > 2.0 * third {
        ball.vel.x = ball.vel.x.abs();
    }

    true
}

/// Bounce the ball off a brick's bounding box.
///
/// Computes the four penetration depths and resolves on the axis with the
/// strictly smaller overlap; ties resolve on Y. The ball is pushed out by
/// the smaller overlap on the chosen axis and the matching velocity
/// component is negated. Returns true if the boxes overlapped.
pub fn bounce_off_brick(ball: &mut Ball, brick: &Rect) -> bool {
    if !ball.rect.intersects(brick) {
        return false;
    }

    let overlap_left = ball.rect.right() - brick.left();
    let overlap_right = brick.right() - ball.rect.left();
    let overlap_top = ball.rect.bottom() - brick.top();
    let overlap_bottom = brick.bottom() - ball.rect.top();

    let min_overlap_x = overlap_left.min(overlap_right);
    let min_overlap_y = overlap_top.min(overlap_bottom);

    if min_overlap_x < min_overlap_y {
        if overlap_left < overlap_right {
            ball.rect.pos.x -= overlap_left;
        } else {
            ball.rect.pos.x += overlap_right;
        }
        ball.vel.x = -ball.vel.x;
    } else {
        if overlap_top < overlap_bottom {
            ball.rect.pos.y -= overlap_top;
        } else {
            ball.rect.pos.y += overlap_bottom;
        }
        ball.vel.y = -ball.vel.y;
    }

    true
}

/// True once the ball has fallen past the bottom edge
pub fn ball_below_board(ball: &Ball) -> bool {
    ball.rect.top() > BOARD_HEIGHT
}

use crate::{Ball, Paddle, PaddleCommand};

/// Scripted opponent: step toward the ball's vertical center, but hold while
/// within `dead_zone` of it. The lag this causes is what makes it beatable.
pub fn track_ball(paddle: &Paddle, ball: &Ball, dead_zone: f32) -> PaddleCommand {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center().y;

    if paddle_center < ball_center - dead_zone {
        PaddleCommand::Down
    } else if paddle_center > ball_center + dead_zone {
        PaddleCommand::Up
    } else {
        PaddleCommand::Hold
    }
}

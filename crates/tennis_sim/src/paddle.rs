use crate::{GameConfig, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, keyboard controlled.
    Player,
    /// Right paddle, driven by the scripted opponent.
    Opponent,
}

/// One tick's worth of paddle intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleCommand {
    Up,
    Down,
    #[default]
    Hold,
}

/// Vertical actor pinned to one side of the screen.
///
/// `y` is the top edge and always satisfies `0 <= y <= screen_height - height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    side: Side,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    max_y: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Player => config.paddle_margin,
            Side::Opponent => config.screen_width - config.paddle_margin - config.paddle_width,
        };
        Self {
            side,
            x,
            y: config.paddle_start_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            max_y: config.screen_height - config.paddle_height,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// No-op at the top edge.
    pub fn move_up(&mut self) {
        self.y = (self.y - self.speed).max(0.0);
    }

    /// No-op at the bottom edge.
    pub fn move_down(&mut self) {
        self.y = (self.y + self.speed).min(self.max_y);
    }

    pub fn apply(&mut self, command: PaddleCommand) {
        match command {
            PaddleCommand::Up => self.move_up(),
            PaddleCommand::Down => self.move_down(),
            PaddleCommand::Hold => {}
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

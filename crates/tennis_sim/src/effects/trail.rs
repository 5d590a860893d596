use std::collections::VecDeque;

use glam::Vec2;

/// Fixed-capacity FIFO of recent ball centers, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec2> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_capacity() {
        let mut trail = TrailBuffer::new(10);
        for i in 0..7 {
            trail.push(Vec2::splat(i as f32));
        }
        assert_eq!(trail.len(), 7);
    }

    #[test]
    fn keeps_most_recent_in_order() {
        let mut trail = TrailBuffer::new(10);
        for i in 0..25 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 10);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        let expected: Vec<f32> = (15..25).map(|i| i as f32).collect();
        assert_eq!(xs, expected);
    }
}

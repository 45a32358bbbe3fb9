/// Input events the sandbox understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at surface coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The pointer moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The press ended.
    PointerUp,
    /// Spawn one randomized sprite ("create" button).
    Spawn,
    /// Schedule removal of the selected sprite ("destroy" button).
    Destroy,
}

/// Host events waiting for the next frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take everything queued so far. The queue is empty afterwards and
    /// can be pushed to while the taken events are being applied.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerUp);
        q.push(InputEvent::Destroy);
        assert_eq!(
            q.drain(),
            vec![InputEvent::PointerDown { x: 10.0, y: 20.0 }, InputEvent::PointerUp, InputEvent::Destroy]
        );
        assert!(q.drain().is_empty());
    }

    #[test]
    fn pushes_after_drain_start_a_new_batch() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Spawn);
        let first = q.drain();
        q.push(InputEvent::Destroy);
        assert_eq!(first, vec![InputEvent::Spawn]);
        assert_eq!(q.drain(), vec![InputEvent::Destroy]);
    }
}

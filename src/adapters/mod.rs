mod stack;
pub use stack::Stack;

mod queue;
pub use queue::Queue;

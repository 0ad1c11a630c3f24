// ============================================================================
// campfire - Reactivity Module
// Subscriber registry, synchronous dispatch and the Observable capability
// ============================================================================

pub mod emitter;
pub mod observable;
pub mod registry;

pub use emitter::Emitter;
pub use observable::Observable;
pub use registry::{Subscriber, SubscriberRegistry};

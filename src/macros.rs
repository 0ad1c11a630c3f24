// ============================================================================
// campfire - Macros
// ============================================================================

/// Clone variables into a move closure.
///
/// Subscribers are `'static`, so every store handle or shared counter they
/// touch has to be cloned in first. This removes that boilerplate.
///
/// # Usage
///
/// ```rust
/// use campfire::{cloned, EventType, ListStore, Store};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let todos = ListStore::new(vec!["a"]);
/// let count = Store::new(1);
/// let pushes = Rc::new(Cell::new(0));
///
/// // Keep `count` in sync with the list length
/// todos.on(EventType::Push, cloned!(todos, count, pushes => move |_| {
///     pushes.set(pushes.get() + 1);
///     count.update(todos.len());
/// }), false);
///
/// todos.push("b");
/// assert_eq!((count.get(), pushes.get()), (2, 1));
/// todos.dispose();
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to the shared query-state store owning the selected unit.
///
/// The selected unit is `Option<String>`: `None` is the cleared sentinel and
/// is distinct from `Some("")`. The unit filter controller is the only
/// component that writes through this handle; reads may happen anywhere.
pub trait QueryState {
    fn unit(&self) -> Option<String>;
    fn set_unit(&mut self, unit: Option<&str>);
}

/// In-process query state, also the test double.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryQueryState {
    unit: Option<String>,
}

impl QueryState for InMemoryQueryState {
    fn unit(&self) -> Option<String> {
        self.unit.clone()
    }

    fn set_unit(&mut self, unit: Option<&str>) {
        self.unit = unit.map(str::to_owned);
    }
}

/// Lets a store shared with the rest of a query builder be handed to the
/// controller without moving ownership. Single-threaded by construction;
/// every call completes within one UI dispatch turn.
impl<S: QueryState> QueryState for Rc<RefCell<S>> {
    fn unit(&self) -> Option<String> {
        self.borrow().unit()
    }

    fn set_unit(&mut self, unit: Option<&str>) {
        self.borrow_mut().set_unit(unit);
    }
}

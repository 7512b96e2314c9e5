//! Cut flags scoped to one alternative.

use std::cell::Cell;
use std::rc::Rc;

/// "Cut has fired" flag shared by the branches of one alternative.
///
/// Rules start their term under an unbound control, on which `cut` does
/// nothing: a cut outside any alternative has nothing to commit to.
#[derive(Debug)]
pub struct Control {
    cut: Cell<bool>,
    bound: bool,
}

impl Control {
    pub fn unbound() -> Self {
        Control {
            cut: Cell::new(false),
            bound: false,
        }
    }

    fn bound() -> Self {
        Control {
            cut: Cell::new(false),
            bound: true,
        }
    }

    #[inline]
    pub fn cut(&self) {
        if self.bound {
            self.cut.set(true);
        }
    }

    #[inline]
    pub fn has_cut(&self) -> bool {
        self.cut.get()
    }
}

/// LIFO pool of bound controls, one live control per nested alternative.
#[derive(Debug, Default)]
pub(crate) struct ControlPool {
    controls: Vec<Rc<Control>>,
    depth: usize,
}

impl ControlPool {
    pub(crate) fn acquire(&mut self) -> Rc<Control> {
        if self.depth == self.controls.len() {
            self.controls.push(Rc::new(Control::bound()));
        }
        let control = Rc::clone(&self.controls[self.depth]);
        self.depth += 1;
        control
    }

    pub(crate) fn release(&mut self, control: &Rc<Control>) {
        debug_assert!(self.depth > 0, "control released twice");
        self.depth -= 1;
        debug_assert!(
            Rc::ptr_eq(control, &self.controls[self.depth]),
            "controls released out of order"
        );
        control.cut.set(false);
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }
}

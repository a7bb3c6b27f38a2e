use std::rc::Rc;

use yew::Reducible;

/// Open/closed flag of a single FAQ panel. Panels never look at each other,
/// so any number of them can be open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub is_open: bool,
}

impl Disclosure {
    pub fn activate(self) -> Self {
        Self {
            is_open: !self.is_open,
        }
    }
}

pub enum DisclosureAction {
    Activate,
}

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisclosureAction::Activate => Rc::new(self.activate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Disclosure::default().is_open);
    }

    #[test]
    fn activations_alternate_open_and_closed() {
        let panel = Disclosure::default();
        let once = panel.activate();
        let twice = once.activate();
        let thrice = twice.activate();
        assert!(once.is_open);
        assert!(!twice.is_open);
        assert!(thrice.is_open);
    }

    #[test]
    fn parity_of_activations_decides_the_state() {
        for start in [false, true] {
            for n in 0..8 {
                let mut panel = Disclosure { is_open: start };
                for _ in 0..n {
                    panel = panel.activate();
                }
                assert_eq!(panel.is_open, start ^ (n % 2 == 1));
            }
        }
    }

    #[test]
    fn panels_do_not_affect_each_other() {
        let mut panels = vec![Disclosure::default(); 5];
        panels[1] = panels[1].activate();
        panels[3] = panels[3].activate();
        panels[3] = panels[3].activate();
        panels[4] = panels[4].activate();

        let open: Vec<bool> = panels.iter().map(|p| p.is_open).collect();
        assert_eq!(open, vec![false, true, false, false, true]);
    }

    #[test]
    fn reducer_flips_through_activate() {
        let panel = Rc::new(Disclosure::default());
        let panel = panel.reduce(DisclosureAction::Activate);
        assert!(panel.is_open);
        let panel = panel.reduce(DisclosureAction::Activate);
        assert!(!panel.is_open);
    }
}

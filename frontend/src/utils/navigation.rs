use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};
use std::rc::Rc;

use super::storage;

/// Navigation handle captured while a component is being set up, so async
/// continuations can redirect after the reactive owner is gone.
#[derive(Clone, Default)]
pub struct Redirector {
    navigate: Option<Rc<dyn Fn(&str)>>,
}

impl Redirector {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            navigate: Some(Rc::new(navigate)),
        }
    }

    /// A `Redirector` provided through context wins over the router's navigator.
    pub fn capture() -> Self {
        if let Some(redirector) = use_context::<Redirector>() {
            return redirector;
        }
        let navigate = use_context::<RouterContext>().map(|_| {
            let navigate = use_navigate();
            Rc::new(move |path: &str| navigate(path, NavigateOptions::default()))
                as Rc<dyn Fn(&str)>
        });
        Self { navigate }
    }

    pub fn redirect(&self, path: &str) {
        log::info!("Redirecting to {}", path);
        match &self.navigate {
            Some(navigate) => navigate(path),
            None => {
                if let Ok(win) = storage::window() {
                    let _ = win.location().set_href(path);
                }
            }
        }
    }
}

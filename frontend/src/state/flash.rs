use leptos::*;

/// One-shot notices shown above the page content. Setting one kind clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashMessages {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl FlashMessages {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

#[derive(Clone, Copy)]
pub struct FlashContext(pub RwSignal<FlashMessages>);

#[component]
pub fn FlashProvider(children: Children) -> impl IntoView {
    provide_context(FlashContext(create_rw_signal(FlashMessages::default())));
    view! { <>{children()}</> }
}

pub fn use_flash() -> RwSignal<FlashMessages> {
    use_context::<FlashContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| create_rw_signal(FlashMessages::default()))
}

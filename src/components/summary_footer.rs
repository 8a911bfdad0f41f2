//! Summary Footer Component

use leptos::prelude::*;

use crate::config::Messages;
use crate::summary::{Summary, SummaryStatus};

/// Footer with completion progress
#[component]
pub fn SummaryFooter(
    #[prop(into)] summary: Signal<Summary>,
    messages: &'static Messages,
) -> impl IntoView {
    let footer_class = move || match summary.get().status() {
        SummaryStatus::Empty => "summary empty",
        SummaryStatus::AllDone => "summary done",
        SummaryStatus::Progress { .. } => "summary",
    };

    view! {
        <footer class=footer_class>
            <p>{move || summary.get().message(messages)}</p>
        </footer>
    }
}

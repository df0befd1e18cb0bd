//! Metadata line shared by cards and the modal header

use leptos::prelude::*;

use crate::view::MetaEntry;

#[component]
pub fn MetaList(entries: Vec<MetaEntry>, class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {entries
                .into_iter()
                .map(|entry| view! {
                    <span class=format!("meta-{}", entry.kind.class_suffix())>
                        <i class=entry.kind.icon_class() aria-hidden="true"></i>
                        " "
                        {entry.text}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

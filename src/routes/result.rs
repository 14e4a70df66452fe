//! Result page. Fetches once on mount with whatever token is stored and
//! renders the payload as a summary plus togglable sections.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::result::{
    service::ResultService,
    state::ResultView,
    types::{ResultSection, SectionId},
};
use crate::features::session::context::use_session;
use leptos::prelude::*;
use tracing::warn;

#[component]
pub fn ResultPage() -> impl IntoView {
    let token = use_session().session().token();
    let has_token = token.is_some();
    let state = RwSignal::new(ResultView::new());
    // Rebuild the body only when data arrives, not on every section click.
    let loaded = Memo::new(move |_| state.with(ResultView::has_data));

    let exam = LocalResource::new(move || {
        let token = token.clone();
        async move { ResultService::browser().get_exam_details(token).await }
    });

    Effect::new(move |_| match exam.get() {
        Some(Ok(outcome)) => state.update(|state| state.apply(outcome)),
        Some(Err(err)) => warn!(error = %err, "exam details request failed"),
        None => {}
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Result"</h1>
            {(!has_token).then(|| {
                view! {
                    <Alert
                        kind=AlertKind::Info
                        message="You are not logged in; results may be unavailable.".to_string()
                    />
                }
            })}
            {move || {
                if exam.get().is_none() {
                    return view! { <div class="py-12 text-center"><Spinner /></div> }.into_any();
                }
                if !loaded.get() {
                    return view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">"No result available."</p>
                    }
                        .into_any();
                }
                view! {
                    <ResultSummary rows=state.with_untracked(ResultView::summary) />
                    <SectionToggles state=state />
                    <div class="space-y-4">
                        {state
                            .with_untracked(ResultView::sections)
                            .into_iter()
                            .map(|section| view! { <SectionTable section=section state=state /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn ResultSummary(rows: Vec<(String, String)>) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="p-4 bg-white border border-gray-200 rounded-lg dark:bg-gray-800 dark:border-gray-700">
                            <dt class="text-xs font-medium text-gray-500 uppercase dark:text-gray-400">{label}</dt>
                            <dd class="mt-1 text-lg font-semibold text-gray-900 dark:text-white">{value}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
fn SectionToggles(state: RwSignal<ResultView>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {state
                .with_untracked(ResultView::toggles)
                .into_iter()
                .map(|(id, title)| {
                    let active_id = id.clone();
                    view! {
                        <button
                            type="button"
                            class="px-4 py-2 text-sm font-medium border border-gray-200 rounded-lg hover:bg-gray-100 dark:border-gray-600 dark:text-white dark:hover:bg-gray-700"
                            class:bg-blue-700=move || state.with(|state| state.is_section_visible(&active_id))
                            on:click=move |_| {
                                let id: SectionId = id.clone();
                                state.update(|state| state.select_section(id));
                            }
                        >
                            {title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SectionTable(section: ResultSection, state: RwSignal<ResultView>) -> impl IntoView {
    let ResultSection { id, title, table } = section;

    view! {
        <div
            class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg"
            class:hidden=move || !state.with(|state| state.is_section_visible(&id))
        >
            <h2 class="px-6 py-3 text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        {table
                            .columns
                            .into_iter()
                            .map(|column| {
                                view! {
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        {column}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {table
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {row
                                        .into_iter()
                                        .map(|cell| {
                                            view! {
                                                <td class="px-6 py-4 text-sm text-gray-900 dark:text-white">{cell}</td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

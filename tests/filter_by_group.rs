//! End-to-end FilterByGroup flow: a consumer subscribed through the
//! context, a deferred registration handle triggered later, selection
//! and reset driven through the default filter widget.

use std::cell::RefCell;
use std::rc::Rc;

use spark_content::{
    Filter, FilterByGroupProvider, FilterProps, FilterView, RegisterSuggestions, Tag,
};

fn tag(id: &str, name: &str) -> Tag {
    Tag::new(id, name).unwrap()
}

/// Stand-in for a consumer component: records what it would render.
struct ConsumerLog {
    tag_counts: Rc<RefCell<Vec<usize>>>,
    selected_names: Rc<RefCell<Vec<String>>>,
}

impl ConsumerLog {
    fn attach(provider: &FilterByGroupProvider) -> (Self, spark_content::Cleanup) {
        let tag_counts: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let selected_names: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let ctx = provider.context();
        let counts = tag_counts.clone();
        let names = selected_names.clone();
        let cleanup = ctx.clone().watch(move || {
            counts.borrow_mut().push(ctx.suggestions().len());
            let selected = ctx
                .selected_tags()
                .first()
                .map(|t| t.name().to_string())
                .unwrap_or_default();
            names.borrow_mut().push(selected);
        });

        (
            Self {
                tag_counts,
                selected_names,
            },
            cleanup,
        )
    }
}

#[test]
fn consumer_sees_seed_then_deferred_additions() {
    let provider = FilterByGroupProvider::mount_with_suggestions(vec![
        tag("test-id-1", "Test Tag 1"),
        tag("test-id-2", "Test Tag 2"),
    ]);
    let (log, _cleanup) = ConsumerLog::attach(&provider);

    assert_eq!(*log.tag_counts.borrow(), vec![2]);

    // The registration handle is created at mount time but only invoked
    // in response to a later "click".
    let register: RegisterSuggestions = provider.context().register_suggestions_handle();
    register.register(vec![tag("new-tag-id", "New Tag")]);

    assert_eq!(*log.tag_counts.borrow(), vec![2, 3]);
    let suggestions = provider.context().suggestions();
    assert_eq!(suggestions[2].name(), "New Tag");
}

#[test]
fn select_and_reset_through_the_widget() {
    let provider = FilterByGroupProvider::mount_with_suggestions(vec![
        tag("t1", "Tag 1"),
        tag("t2", "Tag 2"),
    ]);
    let (log, _cleanup) = ConsumerLog::attach(&provider);

    let views: Rc<RefCell<Vec<FilterView>>> = Rc::new(RefCell::new(Vec::new()));
    let views_clone = views.clone();
    let filter = Filter::attach(
        &provider.context(),
        FilterProps {
            on_render: Some(Rc::new(move |view| {
                views_clone.borrow_mut().push(view.clone());
            })),
        },
    );

    assert_eq!(log.selected_names.borrow().last().unwrap(), "");

    assert!(filter.select("t1"));
    assert_eq!(log.selected_names.borrow().last().unwrap(), "Tag 1");
    let selected_rows = views
        .borrow()
        .last()
        .unwrap()
        .items
        .iter()
        .filter(|item| item.selected)
        .count();
    assert_eq!(selected_rows, 1);

    filter.reset();
    assert_eq!(log.selected_names.borrow().last().unwrap(), "");
    assert!(views
        .borrow()
        .last()
        .unwrap()
        .items
        .iter()
        .all(|item| !item.selected));
}

#[test]
fn unmount_discards_store_and_observers() {
    let provider = FilterByGroupProvider::mount_with_suggestions(vec![tag("t1", "Tag 1")]);
    let (log, _cleanup) = ConsumerLog::attach(&provider);
    let ctx = provider.context();

    assert_eq!(log.tag_counts.borrow().len(), 1);
    provider.unmount();

    assert!(!ctx.is_mounted());
    assert_eq!(log.tag_counts.borrow().len(), 1);
}

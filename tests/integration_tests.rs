use formfix::models::{ClickOutcome, Element, Event, Page};
use formfix::services::confirm::StaticPrompt;
use formfix::{Binder, Config};

fn input(id: &str, value: &str) -> Element {
    let mut element = Element::with_id("input", id);
    element.value = value.to_string();
    element
}

fn post_form_page(title: &str, body: &str) -> Page {
    let mut form = Element::with_id("form", "post-form");
    form.children.push(input("title", title));
    form.children.push(input("alias", ""));
    form.children.push(input("body", body));

    let mut delete = Element::with_id("a", "delete-post");
    delete.classes.push("confirm".to_string());
    form.children.push(delete);
    form.children.push(Element::with_id("a", "preview-post"));

    let mut typeahead = Element::new("span");
    typeahead.classes.push("twitter-typeahead".to_string());
    typeahead.children.push(Element::with_id("input", "image"));

    Page::new(vec![form, typeahead])
}

fn keyup(target: &str) -> Event {
    Event::Keyup {
        target: target.to_string(),
    }
}

fn click(target: &str) -> Event {
    Event::Click {
        target: target.to_string(),
    }
}

mod slug_sync_tests {
    use super::*;

    #[test]
    fn test_keyup_rewrites_alias() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("Hello World", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &keyup("title"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some("hello-world"));
    }

    #[test]
    fn test_each_keyup_recomputes_from_scratch() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("Draft Title", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &keyup("title"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some("draft-title"));

        page.set_value("title", "Новости Дня!");
        binder.dispatch(&mut page, &keyup("title"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some("новости-дня"));

        page.set_value("title", "");
        binder.dispatch(&mut page, &keyup("title"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some(""));
    }

    #[test]
    fn test_keyup_elsewhere_is_ignored() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("Hello World", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &keyup("body"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some(""));
    }

    #[test]
    fn test_slug_on_keyup_can_be_disabled() {
        let mut config = Config::default();
        config.form.slug_on_keyup = false;
        let binder = Binder::new(config);
        let mut page = post_form_page("Hello World", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &keyup("title"), &mut prompt);
        assert_eq!(page.value_of("alias"), Some(""));
    }

    #[test]
    fn test_attach_requires_title_and_alias() {
        let binder = Binder::new(Config::default());

        let page = post_form_page("x", "");
        assert!(binder.attach(&page).is_ok());

        let bare = Page::new(vec![input("title", "x")]);
        let err = binder.attach(&bare).unwrap_err();
        assert!(err.to_string().contains("alias"));
    }
}

mod ready_tests {
    use super::*;

    #[test]
    fn test_ready_focuses_non_empty_body() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "abc");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &Event::Ready, &mut prompt);
        assert_eq!(page.focused_id(), Some("body"));
        assert_eq!(page.focus.as_ref().unwrap().caret, 3);
    }

    #[test]
    fn test_ready_skips_empty_body() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &Event::Ready, &mut prompt);
        assert!(page.focus.is_none());
    }

    #[test]
    fn test_ready_fixes_typeahead_wrapper() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &Event::Ready, &mut prompt);
        let wrapper = &page.elements[1];
        assert_eq!(wrapper.display.as_deref(), Some("block"));
    }

    #[test]
    fn test_ready_leaves_wrapper_without_image() {
        let mut config = Config::default();
        config.form.focus_body = false;
        let binder = Binder::new(config);

        let mut wrapper = Element::new("span");
        wrapper.classes.push("twitter-typeahead".to_string());
        wrapper.children.push(Element::with_id("input", "tags"));
        let mut page = Page::new(vec![wrapper]);
        let mut prompt = StaticPrompt(true);

        binder.dispatch(&mut page, &Event::Ready, &mut prompt);
        assert!(page.elements[0].display.is_none());
    }
}

mod confirm_tests {
    use super::*;

    #[test]
    fn test_confirmed_click_proceeds() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        let mut prompt = StaticPrompt(true);

        let outcome = binder.dispatch(&mut page, &click("delete-post"), &mut prompt);
        assert_eq!(outcome, Some(ClickOutcome::Proceed));
    }

    #[test]
    fn test_denied_click_is_suppressed() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        let mut prompt = StaticPrompt(false);

        let outcome = binder.dispatch(&mut page, &click("delete-post"), &mut prompt);
        assert_eq!(outcome, Some(ClickOutcome::Suppressed));
    }

    #[test]
    fn test_unmarked_click_skips_prompt() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        // A denying prompt must not even be consulted here.
        let mut prompt = StaticPrompt(false);

        let outcome = binder.dispatch(&mut page, &click("preview-post"), &mut prompt);
        assert_eq!(outcome, Some(ClickOutcome::Proceed));
    }

    #[test]
    fn test_click_on_missing_element_proceeds() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("", "");
        let mut prompt = StaticPrompt(false);

        let outcome = binder.dispatch(&mut page, &click("ghost"), &mut prompt);
        assert_eq!(outcome, Some(ClickOutcome::Proceed));
    }
}

mod fixture_tests {
    use super::*;

    #[test]
    fn test_page_fixture_roundtrip() {
        let page = post_form_page("Hello World", "draft body");
        let json = serde_json::to_string(&page).expect("serialize page");
        let back: Page = serde_json::from_str(&json).expect("deserialize page");
        assert!(back.find("title").is_some());
        assert_eq!(back.value_of("body"), Some("draft body"));
    }

    #[test]
    fn test_minimal_fixture_uses_defaults() {
        let page: Page = serde_json::from_str(
            r#"{"elements": [{"id": "title"}, {"id": "alias"}]}"#,
        )
        .expect("deserialize minimal fixture");
        assert_eq!(page.value_of("title"), Some(""));
        assert!(Binder::new(Config::default()).attach(&page).is_ok());
    }

    #[test]
    fn test_full_event_script() {
        let binder = Binder::new(Config::default());
        let mut page = post_form_page("  Multiple   Spaces  ", "existing draft");
        let mut prompt = StaticPrompt(true);

        let events: Vec<Event> = serde_json::from_str(
            r#"[
                {"kind": "ready"},
                {"kind": "keyup", "target": "title"},
                {"kind": "click", "target": "delete-post"}
            ]"#,
        )
        .expect("deserialize event script");

        let mut outcomes = Vec::new();
        for event in &events {
            outcomes.push(binder.dispatch(&mut page, event, &mut prompt));
        }

        assert_eq!(page.focused_id(), Some("body"));
        assert_eq!(page.value_of("alias"), Some("multiple-spaces"));
        assert_eq!(outcomes[2], Some(ClickOutcome::Proceed));
    }
}

use std::cell::RefCell;

use super::*;

#[test]
fn router_navigator_replaces_history_entry() {
    let calls = RefCell::new(Vec::new());
    let navigator = RouterNavigator::new(|path: &str, options: NavigateOptions| {
        calls.borrow_mut().push((path.to_owned(), options.replace));
    });
    navigator.replace(HOME_PATH);
    assert_eq!(calls.into_inner(), vec![("/".to_owned(), true)]);
}

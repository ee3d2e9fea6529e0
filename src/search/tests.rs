use super::merged;
use std::cell::RefCell;
use std::rc::Rc;

#[::core::prelude::v1::test]
fn toolbar_handler_fires_before_input_handler() {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let toolbar = {
        let log = log.clone();
        Rc::new(move || log.borrow_mut().push("toolbar")) as Rc<dyn Fn()>
    };
    let input = {
        let log = log.clone();
        Rc::new(move || log.borrow_mut().push("input")) as Rc<dyn Fn()>
    };

    for handler in merged(Some(toolbar), Some(input)) {
        handler();
    }

    assert_eq!(*log.borrow(), vec!["toolbar", "input"]);
}

#[::core::prelude::v1::test]
fn either_handler_may_be_absent() {
    assert!(merged::<u8>(None, None).is_empty());
    assert_eq!(merged(Some(1), None), vec![1]);
    assert_eq!(merged(None, Some(2)), vec![2]);
}

use super::*;

#[test]
fn buffer_captures_in_order() {
    let handler = buffer_handler();
    handler.print("hello");
    handler.print(" ");
    handler.print("world\n");
    assert_eq!(handler.get_output(), "hello world\n");
}

#[test]
fn buffer_clear_empties() {
    let handler = BufferPrintHandler::new();
    handler.print("x");
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn non_capturing_handlers_report_empty() {
    let silent = silent_handler();
    silent.print("dropped");
    assert_eq!(silent.get_output(), "");
    assert_eq!(stdout_handler().get_output(), "");
}

use super::*;

#[test]
fn buffer_captures_lines() {
    let handler = buffer_handler();
    handler.println(">> 7");
    handler.println(">> 1");
    assert_eq!(handler.get_output(), ">> 7\n>> 1\n");
}

#[test]
fn fresh_buffer_is_empty() {
    let handler = BufferPrintHandler::new();
    assert!(handler.get_output().is_empty());
    handler.println("x");
    assert_eq!(handler.get_output(), "x\n");
}

#[test]
fn stdout_captures_nothing() {
    let handler = stdout_handler();
    handler.println(">> 1");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handle_sees_same_buffer() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("a");
    assert_eq!(handler.get_output(), "a\n");
}

use pretty_assertions::assert_eq;

use super::*;

fn at(offset: u32) -> (SourcePosition, Span) {
    (SourcePosition::new(1, offset + 1, offset), Span::new(offset, offset + 1))
}

fn push(stack: &mut DelimiterStack, delimiter: Delimiter, offset: u32) {
    let (position, span) = at(offset);
    stack.push(delimiter, position, span);
}

#[test]
fn tags_map_to_delimiters() {
    assert_eq!(Delimiter::from_opener(RawTag::LeftBrace), Some(Delimiter::Brace));
    assert_eq!(Delimiter::from_closer(RawTag::RightBracket), Some(Delimiter::Bracket));
    assert_eq!(Delimiter::from_opener(RawTag::RightParen), None);
    assert_eq!(Delimiter::from_closer(RawTag::Semicolon), None);
    assert_eq!(Delimiter::Paren.open(), '(');
    assert_eq!(Delimiter::Paren.close(), ')');
}

#[test]
fn nested_matching_closers() {
    let mut stack = DelimiterStack::default();
    push(&mut stack, Delimiter::Brace, 0);
    push(&mut stack, Delimiter::Paren, 1);
    assert_eq!(stack.close(Delimiter::Paren), CloseOutcome::Matched);
    assert_eq!(stack.close(Delimiter::Brace), CloseOutcome::Matched);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn closer_without_opener() {
    let mut stack = DelimiterStack::default();
    assert_eq!(stack.close(Delimiter::Paren), CloseOutcome::Unopened);

    push(&mut stack, Delimiter::Brace, 0);
    assert_eq!(stack.close(Delimiter::Bracket), CloseOutcome::Unopened);
    assert_eq!(stack.depth(), 1, "unmatched closer leaves the stack alone");
}

#[test]
fn closer_matching_deeper_opener_unwinds() {
    let mut stack = DelimiterStack::default();
    push(&mut stack, Delimiter::Brace, 0);
    push(&mut stack, Delimiter::Paren, 2);
    push(&mut stack, Delimiter::Bracket, 4);

    let CloseOutcome::Mismatched { abandoned } = stack.close(Delimiter::Brace) else {
        panic!("expected a mismatch");
    };
    let order: Vec<_> = abandoned.iter().map(|o| o.delimiter).collect();
    assert_eq!(
        order,
        vec![Delimiter::Bracket, Delimiter::Paren, Delimiter::Brace]
    );
    assert_eq!(abandoned[2].span, Span::new(0, 1));
    assert_eq!(stack.depth(), 0);
}

#[test]
fn drain_yields_outermost_first() {
    let mut stack = DelimiterStack::default();
    push(&mut stack, Delimiter::Brace, 0);
    push(&mut stack, Delimiter::Paren, 5);
    let left: Vec<_> = stack.drain().map(|o| o.position.offset).collect();
    assert_eq!(left, vec![0, 5]);
    assert_eq!(stack.depth(), 0);
}

// Every key of the matrix drives exactly one calculator operation
use numcal::*;

fn press_key(calc: &mut Calculator, key: Key) -> Option<DisplayText> {
    key.input().map(|input| calc.input(input))
}

#[test]
fn keymap_layout() {
    assert_eq!(Key::at(0, 0), Some(Key::F1));
    assert_eq!(Key::at(1, 0), Some(Key::Lock));
    assert_eq!(Key::at(5, 0), Some(Key::D0));
    assert_eq!(Key::at(5, 1), Some(Key::D0));
    assert_eq!(Key::at(2, 3), Key::at(3, 3));
    assert_eq!(Key::at(ROWS, 0), None);
    assert_eq!(Key::at(0, COLS), None);
}

#[test]
fn keys_map_to_inputs() {
    assert_eq!(Key::F1.input(), Some(Input::AllClear));
    assert_eq!(Key::F2.input(), Some(Input::Negate));
    assert_eq!(Key::F3.input(), None);
    assert_eq!(Key::F4.input(), None);
    assert_eq!(Key::Lock.input(), Some(Input::Clear));
    assert_eq!(Key::Mul.input(), Some(Input::Operator(Operator::Multiply)));
    assert_eq!(Key::Enter.input(), Some(Input::Equals));
    assert_eq!(Key::Dot.input(), Some(Input::Decimal));
    assert_eq!(Key::D7.input(), Input::try_from('7').ok());
}

#[test]
fn every_digit_key_is_bound() {
    let mut digits: Vec<u8> = KEYMAP
        .iter()
        .flatten()
        .filter_map(|key| match key.input() {
            Some(Input::Digit(d)) => Some(d.value()),
            _ => None,
        })
        .collect();
    digits.sort_unstable();
    digits.dedup();
    assert_eq!(digits, (0..=9).collect::<Vec<u8>>());
}

#[test]
fn keypad_session() {
    let mut calc = Calculator::new();
    let keys = [Key::D1, Key::D2, Key::Add, Key::D3, Key::Mul, Key::D4, Key::Enter];

    let mut shown = None;
    for key in keys {
        shown = press_key(&mut calc, key);
    }
    assert_eq!(shown.as_deref(), Some("24"));

    assert_eq!(press_key(&mut calc, Key::F2).as_deref(), Some("-24"));
    assert_eq!(press_key(&mut calc, Key::F3), None);
    assert_eq!(calc.display().as_str(), "-24");
    assert_eq!(press_key(&mut calc, Key::F1).as_deref(), Some("0"));
}

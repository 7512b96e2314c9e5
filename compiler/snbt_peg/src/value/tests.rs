use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_take_empties_every_holder() {
    let value = erase(vec![1, 2, 3]);
    let shared = Rc::clone(&value);
    assert_eq!(peek::<Vec<i32>>("items", &shared), Some(vec![1, 2, 3]));
    assert_eq!(take::<Vec<i32>>("items", &value), Some(vec![1, 2, 3]));
    assert_eq!(peek::<Vec<i32>>("items", &shared), None);
    assert_eq!(take::<Vec<i32>>("items", &shared), None);
}

#[test]
fn test_take_moves_without_copying() {
    let payload = Rc::new(());
    let value = erase(Rc::clone(&payload));
    let _cached = Rc::clone(&value);
    let taken = take::<Rc<()>>("payload", &value);
    assert_eq!(Rc::strong_count(&payload), 2);
    drop(taken);
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
#[should_panic(expected = "value bound to <digit> has the wrong type")]
fn test_wrong_type_is_fatal() {
    let value = erase('7');
    let _ = peek::<u8>("digit", &value);
}

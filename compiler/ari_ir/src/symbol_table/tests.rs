use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_variables_get_consecutive_slots() {
    let mut table = SymbolTable::new();
    let a = table.variable("a", 2.0);
    let b = table.variable("b", 3.0);
    let c = table.variable("c", 0.0);

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(c.index(), 2);
    assert_eq!(table.environment().as_slice(), &[2.0, 3.0, 0.0]);
}

#[test]
fn test_names_stay_aligned_with_slots() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());
    let x = table.variable("x", 1.0);
    let y = table.variable(String::from("y"), -1.0);

    assert_eq!(table.len(), 2);
    assert_eq!(table.environment().len(), table.len());
    assert_eq!(table.name_of(x), "x");
    assert_eq!(table.name_of(y), "y");
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn test_get_name_out_of_range() {
    let mut table = SymbolTable::new();
    let _ = table.variable("a", 0.0);
    assert_eq!(table.get_name(0), Some("a"));
    assert_eq!(table.get_name(1), None);
}

#[test]
fn test_duplicate_names_allocate_new_slots() {
    let mut table = SymbolTable::new();
    let first = table.variable("t", 1.0);
    let second = table.variable("t", 2.0);

    assert_ne!(first, second);
    assert_eq!(table.name_of(first), "t");
    assert_eq!(table.lookup("t"), Some(second));
    assert_eq!(table.environment()[first], 1.0);
}

#[test]
fn test_lookup_missing_name() {
    let table = SymbolTable::new();
    assert_eq!(table.lookup("nope"), None);
}

#[test]
fn test_environment_mut_writes_through() {
    let mut table = SymbolTable::new();
    let a = table.variable("a", 2.0);
    *table.environment_mut().slot_mut(a) = 5.0;
    assert_eq!(table.environment()[a], 5.0);
}

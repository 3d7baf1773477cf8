use thinks::arena::*;

#[cfg(test)]
mod tests {
    use super::*;

    // -- insert / remove / generational safety ------------------------------

    #[test]
    fn insert_returns_unique_ids() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn remove_hands_back_the_value() {
        let mut arena = Arena::new();
        let a = arena.insert(String::from("a"));
        assert_eq!(arena.remove(a).as_deref(), Some("a"));
        assert!(!arena.contains(a));
        assert!(arena.is_empty());
    }

    #[test]
    fn removing_twice_returns_none() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        arena.remove(a);
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut arena = Arena::new();
        let old = arena.insert(100);
        arena.remove(old);

        let new = arena.insert(200);
        assert_eq!(old.index(), new.index()); // recycled slot
        assert_ne!(old.generation(), new.generation());

        assert!(arena.get(old).is_none());
        assert_eq!(arena.get(new), Some(&200));
    }

    #[test]
    fn get_mut_modifies_in_place() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        *arena.get_mut(a).unwrap() += 41;
        assert_eq!(arena.get(a), Some(&42));
    }

    // -- clear ----------------------------------------------------------------

    #[test]
    fn clear_drops_every_value_once() {
        use std::rc::Rc;

        let counter = Rc::new(());
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..5).map(|_| arena.insert(Rc::clone(&counter))).collect();
        assert_eq!(Rc::strong_count(&counter), 6);

        arena.clear();
        assert_eq!(Rc::strong_count(&counter), 1);
        assert!(arena.is_empty());
        assert!(ids.iter().all(|&id| !arena.contains(id)));
    }

    #[test]
    fn iter_skips_empty_slots() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);

        let live: Vec<_> = arena.iter().map(|(id, &v)| (id, v)).collect();
        assert_eq!(live, vec![(a, 'a'), (c, 'c')]);
    }
}

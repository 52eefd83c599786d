use super::prelude::*;

pub fn is_favorite(favorites: &[Hotel], id: &Id) -> bool {
    favorites.iter().any(|f| &f.id == id)
}

/// Adds the hotel if it is missing and removes it otherwise.
///
/// Returns whether the hotel is a favorite afterwards.
pub fn toggle_favorite(favorites: &mut Vec<Hotel>, hotel: &Hotel) -> bool {
    if is_favorite(favorites, &hotel.id) {
        favorites.retain(|f| f.id != hotel.id);
        false
    } else {
        favorites.push(hotel.clone());
        true
    }
}

/// Toggles the favorite and rewrites the complete collection.
pub fn toggle_and_save_favorite<R>(
    repo: &R,
    favorites: &mut Vec<Hotel>,
    hotel: &Hotel,
) -> Result<bool>
where
    R: FavoritesRepo,
{
    let is_favorite = toggle_favorite(favorites, hotel);
    log::debug!(
        "Hotel {} is {} favorite",
        hotel.id,
        if is_favorite { "now a" } else { "no longer a" }
    );
    repo.save_favorites(favorites)?;
    Ok(is_favorite)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::MockDb,
        *,
    };
    use luxestay_entities::builders::Builder;
    use std::collections::HashSet;

    fn hotel(id: &str) -> Hotel {
        Hotel::build().id(id).name(id).finish()
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let a = hotel("a");
        let b = hotel("b");
        let mut favorites = vec![a.clone()];
        assert!(toggle_favorite(&mut favorites, &b));
        assert!(!toggle_favorite(&mut favorites, &b));
        assert_eq!(favorites, vec![a.clone()]);
        assert!(!toggle_favorite(&mut favorites, &a));
        assert!(toggle_favorite(&mut favorites, &a));
        assert_eq!(favorites, vec![a]);
    }

    #[test]
    fn never_contain_duplicates() {
        let hotels: Vec<_> = ["a", "b", "c"].into_iter().map(hotel).collect();
        let mut favorites = vec![];
        for i in 0..50 {
            let h = &hotels[(i * 7 + i / 3) % hotels.len()];
            toggle_favorite(&mut favorites, h);
            let ids: HashSet<_> = favorites.iter().map(|f| f.id.clone()).collect();
            assert_eq!(ids.len(), favorites.len());
        }
    }

    #[test]
    fn persist_on_every_toggle() {
        let db = MockDb::default();
        let mut favorites = vec![];
        toggle_and_save_favorite(&db, &mut favorites, &hotel("a")).unwrap();
        toggle_and_save_favorite(&db, &mut favorites, &hotel("b")).unwrap();
        assert_eq!(db.favorites.borrow().len(), 2);
        assert_eq!(*db.favorite_writes.borrow(), 2);
        toggle_and_save_favorite(&db, &mut favorites, &hotel("a")).unwrap();
        assert_eq!(db.load_favorites().unwrap(), vec![hotel("b")]);
        assert_eq!(*db.favorite_writes.borrow(), 3);
    }
}

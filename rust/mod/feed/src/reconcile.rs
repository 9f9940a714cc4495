//! Derive display flags from the preference lists.

use std::collections::HashSet;

use crate::model::Post;

/// Return `fetched` with `is_liked` / `is_saved` set from list membership.
///
/// Membership is by `post_id` only. Inputs are not modified; whatever flags
/// the fetched posts carried are overwritten.
pub fn reconcile(fetched: &[Post], liked: &[Post], saved: &[Post]) -> Vec<Post> {
    let liked = id_set(liked);
    let saved = id_set(saved);
    fetched
        .iter()
        .map(|post| Post {
            is_liked: liked.contains(post.post_id.as_str()),
            is_saved: saved.contains(post.post_id.as_str()),
            ..post.clone()
        })
        .collect()
}

/// Reconcile a single post.
pub fn annotate(post: &Post, liked: &[Post], saved: &[Post]) -> Post {
    Post {
        is_liked: liked.iter().any(|p| p.post_id == post.post_id),
        is_saved: saved.iter().any(|p| p.post_id == post.post_id),
        ..post.clone()
    }
}

fn id_set(list: &[Post]) -> HashSet<&str> {
    list.iter().map(|p| p.post_id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            post_id: id.into(),
            ..Default::default()
        }
    }

    fn flags(posts: &[Post]) -> Vec<(bool, bool)> {
        posts.iter().map(|p| (p.is_liked, p.is_saved)).collect()
    }

    #[test]
    fn flags_follow_membership() {
        let fetched = vec![post("a"), post("b"), post("c")];
        let liked = vec![post("a"), post("z")];
        let saved = vec![post("b"), post("a")];

        let out = reconcile(&fetched, &liked, &saved);
        assert_eq!(flags(&out), vec![(true, true), (false, true), (false, false)]);
    }

    #[test]
    fn stale_flags_are_overwritten() {
        let mut stale = post("a");
        stale.is_liked = true;
        stale.is_saved = true;

        let out = reconcile(&[stale], &[], &[]);
        assert_eq!(flags(&out), vec![(false, false)]);
    }

    #[test]
    fn inputs_untouched() {
        let fetched = vec![post("a")];
        let liked = vec![post("a")];
        let _ = reconcile(&fetched, &liked, &[]);
        assert!(!fetched[0].is_liked);
        assert!(!liked[0].is_liked);
    }

    #[test]
    fn order_and_content_preserved() {
        let mut b = post("b");
        b.submission.title = "second".into();
        let out = reconcile(&[post("a"), b.clone()], &[], &[b.clone()]);
        assert_eq!(out[0].post_id, "a");
        assert_eq!(out[1].submission.title, "second");
    }

    #[test]
    fn exhaustive_small_universe() {
        // Every subset of {a,b,c} as the liked list against the same page.
        let ids = ["a", "b", "c"];
        let fetched: Vec<Post> = ids.iter().map(|id| post(id)).collect();
        for mask in 0u8..8 {
            let liked: Vec<Post> = ids
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| post(id))
                .collect();
            let out = reconcile(&fetched, &liked, &[]);
            for (i, p) in out.iter().enumerate() {
                assert_eq!(p.is_liked, mask & (1 << i) != 0, "mask {mask} post {}", p.post_id);
                assert!(!p.is_saved);
            }
        }
    }

    #[test]
    fn annotate_single() {
        let p = annotate(&post("a"), &[], &[post("a")]);
        assert!(!p.is_liked);
        assert!(p.is_saved);
    }
}

// src/crawl/stack.rs
// =============================================================================
// Depth-first crawl over an explicit worklist.
//
// How it works:
// 1. Fetch the seed page and scan it at depth 0
// 2. Push the page's links so the first one in document order pops first
// 3. Pop a link, print it, and (below the depth ceiling) fetch and scan its
//    target, pushing the children on top of the remaining siblings
// 4. Repeat until the worklist is empty
//
// Pushing children above the pending siblings makes the worklist equivalent
// to call-stack recursion: a link's whole subtree is printed before the next
// sibling. Fetch failures are logged and end only their own branch.
//
// There is no visited-set: the same URL is fetched again every time another
// link path reaches it, and cycles are bounded only by the depth ceiling.
// =============================================================================

use reqwest::Client;

use crate::fetcher;
use crate::link::Link;
use crate::scanner;

/// Crawls from `seed_url` and prints every valid link found within
/// `max_depth` levels, one line per link, indented by depth.
pub async fn crawl_site(client: &Client, seed_url: &str, max_depth: usize) {
    let mut pending: Vec<Link> = Vec::new();

    match fetcher::fetch(client, seed_url).await {
        Ok(page) => queue_links(&mut pending, scanner::scan_page(&page, 0, max_depth)),
        Err(e) => log::error!("{}", e),
    }

    while let Some(link) = pending.pop() {
        println!("{}", link);

        if link.depth + 1 >= max_depth {
            continue;
        }

        match fetcher::fetch(client, &link.url).await {
            Ok(page) => queue_links(
                &mut pending,
                scanner::scan_page(&page, link.depth + 1, max_depth),
            ),
            Err(e) => log::error!("{}", e),
        }
    }
}

/// Pushes one page's links onto the worklist in reverse, so the first link
/// in document order is the next one popped.
fn queue_links(pending: &mut Vec<Link>, links: Vec<Link>) {
    pending.extend(links.into_iter().rev());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_pop_in_document_order() {
        let mut pending = Vec::new();
        queue_links(
            &mut pending,
            vec![
                Link::new("/1", "One", 0),
                Link::new("/2", "Two", 0),
                Link::new("/3", "Three", 0),
            ],
        );

        assert_eq!(pending.pop().unwrap().url, "/1");
        assert_eq!(pending.pop().unwrap().url, "/2");
        assert_eq!(pending.pop().unwrap().url, "/3");
    }

    #[test]
    fn children_pop_before_remaining_siblings() {
        let mut pending = Vec::new();
        queue_links(
            &mut pending,
            vec![Link::new("/a", "A", 0), Link::new("/b", "B", 0)],
        );

        // Visiting /a discovers one child page.
        assert_eq!(pending.pop().unwrap().url, "/a");
        queue_links(&mut pending, vec![Link::new("/a/child", "Child", 1)]);

        // The child comes back before the sibling /b.
        assert_eq!(pending.pop().unwrap().url, "/a/child");
        assert_eq!(pending.pop().unwrap().url, "/b");
        assert!(pending.is_empty());
    }

    #[test]
    fn queueing_an_empty_page_leaves_the_worklist_untouched() {
        let mut pending = vec![Link::new("/a", "A", 0)];
        queue_links(&mut pending, Vec::new());
        assert_eq!(pending.len(), 1);
    }
}

// src/scanner.rs
// =============================================================================
// This module extracts links from one page's HTML token stream.
//
// We drive html5ever's streaming tokenizer and feed its tokens through a
// small state machine: Idle until an anchor start tag with attributes is
// seen, InAnchor while accumulating the anchor's text, back to Idle when the
// end tag closes the capture and a Link is built and validated.
//
// Only the tokenizer layer of html5ever is used. The tree builder is never
// involved, so malformed markup (stray end tags, unclosed anchors) reaches
// the scanner as-is and is handled by the transitions below.
// =============================================================================

use html5ever::local_name;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::Attribute;

use crate::link::Link;

/// Scanner position within the token stream.
enum ScanState {
    /// No anchor is currently open.
    Idle,
    /// Between a captured anchor start tag and its end tag. Carries the
    /// tag's ordered attribute list and the text accumulated so far.
    InAnchor { attrs: Vec<Attribute>, text: String },
}

/// Token sink that collects the valid links of a single page, all at the
/// same depth, in the order their anchors close.
struct LinkScanner {
    depth: usize,
    max_depth: usize,
    state: ScanState,
    links: Vec<Link>,
}

impl LinkScanner {
    fn new(depth: usize, max_depth: usize) -> Self {
        Self {
            depth,
            max_depth,
            state: ScanState::Idle,
            links: Vec::new(),
        }
    }

    /// Applies one token to the current state and returns the next state.
    fn step(&mut self, state: ScanState, token: Token) -> ScanState {
        match token {
            Token::TagToken(tag) if tag.name == local_name!("a") => match tag.kind {
                TagKind::StartTag => Self::open_anchor(state, tag),
                TagKind::EndTag => self.close_anchor(state),
            },
            Token::CharacterTokens(chunk) => match state {
                ScanState::InAnchor { attrs, mut text } => {
                    text.push_str(&chunk);
                    ScanState::InAnchor { attrs, text }
                }
                ScanState::Idle => ScanState::Idle,
            },
            // End of input: an anchor left open has no end tag coming, so
            // its capture is dropped without producing a link.
            Token::EOFToken => {
                if matches!(state, ScanState::InAnchor { .. }) {
                    log::debug!("anchor still open at end of page, discarding");
                }
                ScanState::Idle
            }
            // Doctypes, comments, other elements' tags, parse-error notices
            // and null characters carry no link information.
            _ => state,
        }
    }

    fn open_anchor(state: ScanState, tag: Tag) -> ScanState {
        // An anchor carrying no attributes at all is never a candidate, and
        // a self-closing one cannot enclose any text.
        if tag.attrs.is_empty() || tag.self_closing {
            return state;
        }
        match state {
            ScanState::Idle => ScanState::InAnchor {
                attrs: tag.attrs,
                text: String::new(),
            },
            // A nested start tag replaces the captured attributes but keeps
            // the text accumulated so far.
            ScanState::InAnchor { text, .. } => ScanState::InAnchor {
                attrs: tag.attrs,
                text,
            },
        }
    }

    fn close_anchor(&mut self, state: ScanState) -> ScanState {
        match state {
            ScanState::Idle => {
                log::warn!("anchor end tag without a matching start tag");
                ScanState::Idle
            }
            ScanState::InAnchor { attrs, text } => {
                let link = Link::new(&resolve_href(&attrs), &text, self.depth);
                if link.is_valid(self.max_depth) {
                    log::debug!("link found: {:?}", link);
                    self.links.push(link);
                }
                ScanState::Idle
            }
        }
    }
}

impl TokenSink for LinkScanner {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let state = std::mem::replace(&mut self.state, ScanState::Idle);
        self.state = self.step(state, token);
        TokenSinkResult::Continue
    }
}

/// Resolves the href value from an anchor's ordered attribute list.
///
/// The list is scanned front to back and every `href` key assigns, so when
/// duplicates occur the last one wins. No `href` leaves the URL empty, which
/// the link validation then rejects.
fn resolve_href(attrs: &[Attribute]) -> String {
    let mut url = String::new();
    for attr in attrs {
        if attr.name.local == local_name!("href") {
            url = attr.value.to_string();
        }
    }
    url
}

/// Tokenizes one page of HTML and returns its valid links in document
/// order, all at `depth`.
pub fn scan_page(html: &str, depth: usize, max_depth: usize) -> Vec<Link> {
    let scanner = LinkScanner::new(depth, max_depth);

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(scanner, TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let links = tokenizer.sink.links;
    log::debug!("scanned {} valid links at depth {}", links.len(), depth);
    links
}

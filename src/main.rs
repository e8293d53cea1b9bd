//! sourcelist — print the source list in display order.
//!
//! ```text
//! sourcelist [QUERY]...
//! ```
//!
//! The built-in provider feeds are always listed.  Each `QUERY` adds a search
//! source: `dn:<query>` searches Designer News, anything else searches
//! Dribbble.  A query whose key is already in the list is skipped.
//!
//! One line per source, lowest sort order first:
//!
//! ```text
//!  300  Source{key='SOURCE_DRIBBBLE_POPULAR', name='Popular', active=false}
//!  400  Source{key='DRIBBBLE_QUERY_ui', name='“ui”', active=true}  [dismissable]
//! ```

use std::io::{self, Write};

use anyhow::Result;

use sourcelist::source::{sort_sources, Source};

/// Built-in provider feeds.
fn builtin_sources() -> Vec<Source> {
    vec![
        Source::designer_news(
            "SOURCE_DESIGNER_NEWS_POPULAR",
            100,
            "Designer News Popular",
            true,
        ),
        Source::designer_news(
            "SOURCE_DESIGNER_NEWS_RECENT",
            101,
            "Designer News Recent",
            false,
        ),
        Source::dribbble("SOURCE_DRIBBBLE_POPULAR", 300, "Popular", false),
        Source::dribbble_search("Material Design", true),
    ]
}

fn search_source_from_arg(arg: &str) -> Source {
    match arg.strip_prefix("dn:") {
        Some(query) => Source::designer_news_search(query, true),
        None => Source::dribbble_search(arg, true),
    }
}

/// Built-ins plus one search per argument, keys unique, in display order.
fn build_source_list<I>(args: I) -> Vec<Source>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut sources = builtin_sources();
    for arg in args {
        let source = search_source_from_arg(arg.as_ref());
        if !sources.iter().any(|s| s.key() == source.key()) {
            sources.push(source);
        }
    }
    sort_sources(&mut sources);
    sources
}

fn write_sources(out: &mut impl Write, sources: &[Source]) -> io::Result<()> {
    for source in sources {
        write!(out, "{:>4}  {source}", source.sort_order())?;
        if source.is_swipe_dismissable() {
            write!(out, "  [dismissable]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let sources = build_source_list(std::env::args().skip(1));
    let mut out = io::stdout().lock();
    write_sources(&mut out, &sources)?;
    out.flush()?;
    Ok(())
}

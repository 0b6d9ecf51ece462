// src/scrape.rs
//
// One scrape cycle: validate input → fetch → locate → extract.
// Synchronous; the caller blocks until a Dataset or an error comes back.

use url::Url;

use crate::{
    config::options::ScrapeOptions,
    core::{html, net::Fetch},
    dataset::Dataset,
    error::Result,
    extract,
    progress::{Progress, Step},
};

/// Validated source URL plus the table extracted from it.
#[derive(Debug)]
pub struct Scraped {
    pub source: Url,
    pub dataset: Dataset,
}

pub fn scrape_table(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Scraped> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Step::ALL.len());
    }

    // Reborrow with a shorter object lifetime so `progress` is usable again below.
    let res = run_steps(fetcher, opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress));

    match &res {
        Ok(s) => logf!("Scrape: OK rows={} cols={}", s.dataset.len(), s.dataset.width()),
        Err(e) => loge!("Scrape: Error kind={:?}: {e}", e.kind()),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res
}

fn run_steps(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Scraped> {
    let (source, selector) = opts.validate()?;
    logf!("Scrape: Begin url={source} selector={selector:?}");

    let markup = stage(&mut progress, Step::Fetch, || fetcher.fetch(&source))?;

    let doc = html::parse_document(&markup);
    let table = stage(&mut progress, Step::Parse, || html::locate(&doc, selector))?;

    let dataset = stage(&mut progress, Step::Extract, || extract::extract_table(table))?;
    Ok(Scraped { source, dataset })
}

fn stage<'p, T>(
    progress: &mut Option<&'p mut (dyn Progress + 'p)>,
    step: Step,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(step.label());
    }
    let out = f()?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(step);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct Page(&'static str);

    impl Fetch for Page {
        fn fetch(&self, _url: &Url) -> Result<String> {
            Ok(s!(self.0))
        }
    }

    #[derive(Default)]
    struct Count {
        logs: usize,
        done: usize,
        finished: usize,
    }

    impl Progress for Count {
        fn log(&mut self, _msg: &str) { self.logs += 1; }
        fn step_done(&mut self, _step: Step) { self.done += 1; }
        fn finish(&mut self) { self.finished += 1; }
    }

    const PAGE: &str = "<table id='t'><tr><th>A</th></tr><tr><td>1</td></tr></table>";

    #[test]
    fn progress_is_still_usable_after_the_pipeline() {
        let mut count = Count::default();
        let scraped = scrape_table(
            &Page(PAGE),
            &ScrapeOptions::new("https://example.com/x", "#t"),
            Some(&mut count),
        )
        .unwrap();

        assert_eq!(scraped.source.as_str(), "https://example.com/x");
        assert_eq!(scraped.dataset.len(), 1);
        assert_eq!((count.logs, count.done, count.finished), (3, 3, 1));
    }

    #[test]
    fn finish_runs_on_failure_too() {
        let mut count = Count::default();
        let err = scrape_table(
            &Page(PAGE),
            &ScrapeOptions::new("https://example.com/x", "#missing"),
            Some(&mut count),
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SelectorNotFound);
        assert_eq!((count.done, count.finished), (1, 1));
    }
}

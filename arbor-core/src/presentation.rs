//! Depth-first presentation of an upstream [`Forest`].
//!
//! The engine turns a forest into [`OutputRow`]s. Node color is a pure
//! classification over a handful of facts about the node, evaluated as an
//! ordered rule table so the priority order can be read (and tested) in one
//! place.

use std::collections::{BTreeSet, HashSet};

use owo_colors::AnsiColors;
use tracing::{debug, instrument};

use crate::columns::{Cell, ColumnFormatter, OutputRow, Paint};
use crate::error::Result;
use crate::git::{BranchCatalog, BranchInfo, BranchMetadataSource, DETACHED_HEAD};
use crate::review::{ReviewStatusSource, StatusTable};
use crate::topology::{Forest, NO_UPSTREAM, NodeKind, TopologyBuilder};

/// Text of the single row rendered for an empty forest.
pub const NO_BRANCHES: &str = "No User Branches";

const INDENT: &str = "  ";
const CURRENT_SUFFIX: &str = " *";

/// Color class of a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchClass {
  /// Remote-tracking branch.
  Remote,
  /// Release branch.
  Release,
  /// Tag or unusable parent.
  Detached,
  /// Points at the checked-out commit.
  Current,
  /// Any other branch.
  Local,
}

impl BranchClass {
  /// Palette entry for the class.
  pub const fn color(self) -> AnsiColors {
    match self {
      BranchClass::Remote => AnsiColors::Red,
      BranchClass::Release => AnsiColors::Blue,
      BranchClass::Detached => AnsiColors::Magenta,
      BranchClass::Current => AnsiColors::Cyan,
      BranchClass::Local => AnsiColors::Green,
    }
  }
}

/// Weight of a branch name, decided independently of its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
  Normal,
  Bright,
}

/// Name prefixes that identify remote-tracking and release branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
  pub remote_prefixes: Vec<String>,
  pub release_prefixes: Vec<String>,
}

impl Default for Namespaces {
  fn default() -> Self {
    Self {
      remote_prefixes: vec!["origin/".to_string()],
      release_prefixes: vec!["branch-heads/".to_string()],
    }
  }
}

impl Namespaces {
  /// One `<remote>/` prefix per remote, or `origin/` when there are none.
  pub fn for_remotes<S: AsRef<str>>(remotes: &[S], release_prefixes: Vec<String>) -> Self {
    let mut remote_prefixes: Vec<String> = remotes.iter().map(|remote| format!("{}/", remote.as_ref())).collect();
    if remote_prefixes.is_empty() {
      remote_prefixes.push("origin/".to_string());
    }
    Self {
      remote_prefixes,
      release_prefixes,
    }
  }

  pub fn is_remote(&self, name: &str) -> bool {
    self.remote_prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
  }

  pub fn is_release(&self, name: &str) -> bool {
    self.release_prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
  }
}

/// Facts about a node that its color depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeFacts<'a> {
  /// Node name as it appears in the forest.
  pub name: &'a str,
  /// The node is the empty or a gone placeholder.
  pub invalid_parent: bool,
  /// The node is a tag.
  pub tag: bool,
  /// The node's hash is a non-empty prefix of the HEAD hash.
  pub at_head: bool,
}

type Rule = fn(&Namespaces, &NodeFacts<'_>) -> bool;

fn is_remote(namespaces: &Namespaces, node: &NodeFacts<'_>) -> bool {
  namespaces.is_remote(node.name)
}

fn is_release(namespaces: &Namespaces, node: &NodeFacts<'_>) -> bool {
  namespaces.is_release(node.name)
}

fn is_detached(_: &Namespaces, node: &NodeFacts<'_>) -> bool {
  node.invalid_parent || node.tag
}

fn is_at_head(_: &Namespaces, node: &NodeFacts<'_>) -> bool {
  node.at_head
}

/// Classification rules in priority order; the first match wins.
const CLASS_RULES: [(Rule, BranchClass); 4] = [
  (is_remote, BranchClass::Remote),
  (is_release, BranchClass::Release),
  (is_detached, BranchClass::Detached),
  (is_at_head, BranchClass::Current),
];

/// Color class of a node, falling back to [`BranchClass::Local`].
pub fn classify(namespaces: &Namespaces, node: &NodeFacts<'_>) -> BranchClass {
  CLASS_RULES
    .iter()
    .find(|(rule, _)| rule(namespaces, node))
    .map_or(BranchClass::Local, |(_, class)| *class)
}

/// Weight of a node.
pub fn weight(node: &NodeFacts<'_>) -> Weight {
  if node.at_head { Weight::Bright } else { Weight::Normal }
}

/// Display settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationOptions {
  /// 0 = names only, 1 = tracking status, 2 = hash and review, 3 = fine-grained review.
  pub verbosity: u8,
  /// Append the commit subject of every node.
  pub show_subject: bool,
  pub namespaces: Namespaces,
}

impl PresentationOptions {
  fn show_tracking(&self) -> bool {
    self.verbosity >= 1
  }

  fn show_hash_and_review(&self) -> bool {
    self.verbosity >= 2
  }

  fn fine_grained_review(&self) -> bool {
    self.verbosity >= 3
  }
}

/// What HEAD points at, captured once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadContext {
  /// Checked-out branch, or [`DETACHED_HEAD`].
  pub current_branch: String,
  /// Short hash of HEAD; empty when HEAD has no commit yet.
  pub current_hash: String,
  pub tags: BTreeSet<String>,
}

impl HeadContext {
  /// Read HEAD and tags from `source`.
  pub fn from_source(source: &dyn BranchMetadataSource) -> Result<Self> {
    let current_hash = source.head_hash(true).unwrap_or_else(|err| {
      debug!(error = %err, "HEAD does not resolve to a commit");
      String::new()
    });

    Ok(Self {
      current_branch: source.current_branch()?,
      current_hash,
      tags: source.tags()?,
    })
  }

  fn is_checked_out(&self, name: &str) -> bool {
    name == self.current_branch || (self.current_branch == DETACHED_HEAD && name == self.current_hash)
  }

  fn is_at_head(&self, hash: Option<&str>) -> bool {
    hash.is_some_and(|hash| !hash.is_empty() && self.current_hash.starts_with(hash))
  }
}

/// Walks a forest and produces one row per node.
pub struct PresentationEngine<'a> {
  source: &'a dyn BranchMetadataSource,
  options: &'a PresentationOptions,
}

impl<'a> PresentationEngine<'a> {
  /// `source` answers hash and subject lookups for nodes without local metadata.
  pub fn new(source: &'a dyn BranchMetadataSource, options: &'a PresentationOptions) -> Self {
    Self { source, options }
  }

  /// Render every node of `forest`, roots first in lexicographic order.
  ///
  /// Branches unreachable from any root (upstream cycles) are rendered after
  /// the roots, starting from the first unvisited parent in name order.
  /// The [`NO_BRANCHES`] row is only rendered when the forest holds no
  /// branches at all, so a forest made only of cycles still lists them.
  pub fn render(
    &self,
    catalog: &BranchCatalog,
    mut forest: Forest,
    head: &HeadContext,
    statuses: &StatusTable,
  ) -> Vec<OutputRow> {
    if forest.is_empty() {
      return vec![OutputRow::new().with(Cell::new(NO_BRANCHES, Paint::plain()))];
    }

    let mut walk = Walk {
      engine: self,
      catalog,
      head,
      statuses,
      rendered: HashSet::new(),
      rows: Vec::new(),
    };

    let roots: Vec<String> = forest.roots().iter().cloned().collect();
    for root in &roots {
      walk.visit(&mut forest, root, 0);
    }

    while let Some(parent) = forest.first_unvisited_parent() {
      debug!(branch = %parent, "rendering branch unreachable from any root");
      if walk.rendered.contains(&parent) {
        forest.take_children(&parent);
        continue;
      }
      walk.visit(&mut forest, &parent, 0);
    }

    walk.rows
  }
}

struct Walk<'e, 'a> {
  engine: &'e PresentationEngine<'a>,
  catalog: &'e BranchCatalog,
  head: &'e HeadContext,
  statuses: &'e StatusTable,
  rendered: HashSet<String>,
  rows: Vec<OutputRow>,
}

impl Walk<'_, '_> {
  fn visit(&mut self, forest: &mut Forest, name: &str, depth: usize) {
    if !self.rendered.insert(name.to_string()) {
      return;
    }

    let row = self.row(forest, name, depth);
    self.rows.push(row);

    for child in forest.take_children(name) {
      self.visit(forest, &child, depth + 1);
    }
  }

  fn row(&self, forest: &Forest, name: &str, depth: usize) -> OutputRow {
    let (head, options) = (self.head, self.engine.options);
    let info = self.catalog.lookup(name).local();
    let kind = forest.node_kind(name);
    let hash = match info {
      Some(info) => info.hash.clone(),
      None if kind == NodeKind::NoUpstream => None,
      None => self.engine.source.short_hash(name),
    };

    let facts = NodeFacts {
      name,
      invalid_parent: forest.is_invalid_parent(name),
      tag: head.tags.contains(name),
      at_head: head.is_at_head(hash.as_deref()),
    };

    let mut row = OutputRow::new();
    row.push(Cell::new(
      name_text(kind, name, depth, head.is_checked_out(name)),
      Paint::color(classify(&options.namespaces, &facts).color()).with_bright(weight(&facts) == Weight::Bright),
    ));

    if options.show_hash_and_review() {
      row.push(Cell::new(hash.unwrap_or_default(), Paint::color(AnsiColors::Red)).with_separator(" "));
    }

    if options.show_tracking() {
      let tracked = info.filter(|info| !forest.is_invalid_parent(info.upstream.as_deref().unwrap_or(NO_UPSTREAM)));
      for cell in tracking_cells(tracked) {
        row.push(cell);
      }
    }

    if options.show_hash_and_review() {
      let none_text = if facts.invalid_parent { "" } else { "None" };
      let (url, color) = self.statuses.get(name);
      row.push(Cell::new(
        url.unwrap_or(none_text),
        Paint {
          color,
          bright: false,
        },
      ));
    }

    if options.show_subject {
      let subject = if kind == NodeKind::NoUpstream {
        None
      } else {
        self.engine.source.commit_subject(name)
      };
      row.push(Cell::new(subject.unwrap_or_default(), Paint::plain()));
    }

    row
  }
}

fn name_text(kind: NodeKind, name: &str, depth: usize, checked_out: bool) -> String {
  let label = match kind {
    NodeKind::NoUpstream => "{NO_UPSTREAM}".to_string(),
    NodeKind::Gone => format!("{{{name}:GONE}}"),
    NodeKind::Branch => name.to_string(),
  };
  let suffix = if checked_out { CURRENT_SUFFIX } else { "" };
  format!("{}{label}{suffix}", INDENT.repeat(depth))
}

/// The five tracking cells: `[`, `ahead N`, `|`, `behind N`, `]`.
fn tracking_cells(info: Option<&BranchInfo>) -> [Cell; 5] {
  let (ahead, behind) = info.map_or((0, 0), |info| (info.ahead, info.behind));
  let count = |label: &str, n: u32| if n > 0 { format!("{label} {n}") } else { String::new() };
  let either = ahead > 0 || behind > 0;
  let both = ahead > 0 && behind > 0;
  let accent = Paint::color(AnsiColors::Magenta);

  [
    Cell::new(if either { "[" } else { "" }, Paint::plain()).with_separator(" "),
    Cell::new(count("ahead", ahead), accent).with_separator(" "),
    Cell::new(if both { "|" } else { "" }, Paint::plain()).with_separator(" "),
    Cell::new(count("behind", behind), accent).with_separator(" "),
    Cell::new(if either { "]" } else { "" }, Paint::plain()),
  ]
}

/// Render the branch map of `source` as text, without a trailing newline.
///
/// Review statuses are only requested at verbosity 2 and above; `max_jobs`
/// bounds how many lookups `reviews` may run at once.
#[instrument(skip_all, fields(verbosity = options.verbosity))]
pub fn render_branch_map(
  source: &dyn BranchMetadataSource,
  reviews: &dyn ReviewStatusSource,
  options: &PresentationOptions,
  max_jobs: usize,
  no_color: bool,
) -> Result<String> {
  let catalog = source.list_branches(options.show_tracking())?;

  let statuses = if options.show_hash_and_review() {
    let names: Vec<String> = catalog.names().map(str::to_string).collect();
    StatusTable::collect(reviews, &names, options.fine_grained_review(), max_jobs)
  } else {
    StatusTable::default()
  };

  let forest = TopologyBuilder::new(source).build(&catalog);
  let head = HeadContext::from_source(source)?;
  let rows = PresentationEngine::new(source, options).render(&catalog, forest, &head, &statuses);

  let mut formatter = ColumnFormatter::new(no_color);
  formatter.extend(rows)?;
  Ok(formatter.render())
}

#[cfg(test)]
mod tests {
  use insta::assert_snapshot;

  use super::*;
  use crate::git::InMemorySource;
  use crate::review::{ReviewState, ReviewStatus};

  fn branch(name: &str, hash: &str, upstream: Option<&str>) -> BranchInfo {
    BranchInfo::new(name, Some(hash.to_string()), upstream.map(str::to_string))
  }

  fn options(verbosity: u8) -> PresentationOptions {
    PresentationOptions {
      verbosity,
      ..PresentationOptions::default()
    }
  }

  fn render(source: &InMemorySource, verbosity: u8) -> String {
    render_branch_map(source, &crate::review::NoReviewStatus, &options(verbosity), 1, true).unwrap()
  }

  fn rows(source: &InMemorySource, verbosity: u8) -> Vec<OutputRow> {
    let options = options(verbosity);
    let catalog = source.list_branches(true).unwrap();
    let forest = TopologyBuilder::new(source).build(&catalog);
    let head = HeadContext::from_source(source).unwrap();
    PresentationEngine::new(source, &options).render(&catalog, forest, &head, &StatusTable::default())
  }

  fn facts(name: &str) -> NodeFacts<'_> {
    NodeFacts {
      name,
      invalid_parent: false,
      tag: false,
      at_head: false,
    }
  }

  #[test]
  fn empty_forest_renders_sentinel() {
    assert_eq!(render(&InMemorySource::new(), 2), NO_BRANCHES);
  }

  #[test]
  fn remote_root_with_child() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("origin/master")))
      .with_external("origin/master", Some("2222222"))
      .with_head("feature", "1111111");

    let rows = rows(&source, 0);

    assert_eq!(rows.len(), 2);
    let root = &rows[0].cells()[0];
    assert_eq!(root.text, "origin/master");
    assert_eq!(root.paint, Paint::color(AnsiColors::Red));
    let child = &rows[1].cells()[0];
    assert_eq!(child.text, "  feature *");
    assert_eq!(child.paint, Paint::color(AnsiColors::Cyan).with_bright(true));
  }

  #[test]
  fn roots_and_siblings_are_sorted_and_indented() {
    let source = InMemorySource::new()
      .with_branch(branch("main", "aaaaaaa", Some("origin/main")))
      .with_branch(branch("zeta", "bbbbbbb", Some("main")))
      .with_branch(branch("alpha", "ccccccc", Some("main")))
      .with_branch(branch("nested", "ddddddd", Some("alpha")))
      .with_branch(branch("scratch", "eeeeeee", None))
      .with_external("origin/main", None)
      .with_head("main", "aaaaaaa");

    assert_snapshot!(render(&source, 0), @r"
    {NO_UPSTREAM}
      scratch
    origin/main
      main *
        alpha
          nested
        zeta
    ");
  }

  #[test]
  fn gone_upstream_renders_placeholder() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("missing-branch")))
      .with_head("feature", "1111111");

    let rows = rows(&source, 0);

    let placeholder = &rows[0].cells()[0];
    assert_eq!(placeholder.text, "{missing-branch:GONE}");
    assert_eq!(placeholder.paint.color, Some(AnsiColors::Magenta));
    assert_eq!(rows[1].cells()[0].text, "  feature *");
  }

  #[test]
  fn tracking_brackets_follow_counts() {
    let source = InMemorySource::new()
      .with_branch(branch("ahead", "1111111", Some("origin/main")).with_tracking(3, 0))
      .with_branch(branch("both", "2222222", Some("origin/main")).with_tracking(2, 5))
      .with_branch(branch("even", "3333333", Some("origin/main")))
      .with_external("origin/main", None)
      .with_detached_head("9999999");

    assert_snapshot!(render(&source, 1), @r"
    origin/main
      ahead        [ ahead 3            ]
      both         [ ahead 2 | behind 5 ]
      even
    ");
  }

  #[test]
  fn tracking_cells_for_single_counts() {
    let text = |cells: [Cell; 5]| {
      let mut formatter = ColumnFormatter::new(true);
      formatter.extend([cells.into_iter().fold(OutputRow::new(), OutputRow::with)]).unwrap();
      formatter.render()
    };

    let ahead = branch("a", "1", Some("x")).with_tracking(3, 0);
    assert_eq!(text(tracking_cells(Some(&ahead))), "[ ahead 3 ]");
    let both = branch("b", "1", Some("x")).with_tracking(2, 5);
    assert_eq!(text(tracking_cells(Some(&both))), "[ ahead 2 | behind 5 ]");
    let even = branch("c", "1", Some("x"));
    assert_eq!(text(tracking_cells(Some(&even))), "");
    assert!(tracking_cells(Some(&even)).iter().all(|cell| cell.text.is_empty()));
  }

  #[test]
  fn tracking_is_hidden_for_gone_upstream() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("missing")).with_tracking(4, 1))
      .with_detached_head("9999999");

    let rows = rows(&source, 1);

    assert!(rows[1].cells()[1..].iter().all(|cell| cell.text.is_empty()));
  }

  #[test]
  fn every_row_has_the_same_column_count() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("origin/main")).with_tracking(1, 0))
      .with_branch(branch("scratch", "2222222", None))
      .with_branch(branch("lost", "3333333", Some("gone")))
      .with_external("origin/main", None)
      .with_detached_head("9999999");

    for (verbosity, expected) in [(0, 1), (1, 6), (2, 8), (3, 8)] {
      let rows = rows(&source, verbosity);
      assert!(rows.iter().all(|row| row.len() == expected), "verbosity {verbosity}");
    }
  }

  #[test]
  fn every_branch_appears_exactly_once() {
    let source = InMemorySource::new()
      .with_branch(branch("main", "1111111", Some("origin/main")))
      .with_branch(branch("feature", "2222222", Some("main")))
      .with_branch(branch("scratch", "3333333", None))
      .with_external("origin/main", None)
      .with_detached_head("9999999");

    let output = render(&source, 0);
    let names: Vec<&str> = output.lines().map(|line| line.trim()).collect();
    assert_eq!(names, vec!["{NO_UPSTREAM}", "scratch", "origin/main", "main", "feature"]);
  }

  #[test]
  fn upstream_cycles_are_rendered_once() {
    let source = InMemorySource::new()
      .with_branch(branch("a", "1111111", Some("b")))
      .with_branch(branch("b", "2222222", Some("a")))
      .with_branch(branch("self", "3333333", Some("self")))
      .with_detached_head("9999999");

    assert_snapshot!(render(&source, 0), @r"
    a
      b
    self
    ");
  }

  #[test]
  fn detached_head_marks_hash_named_node() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1234567", Some("1234567")))
      .with_external("1234567", Some("1234567"))
      .with_detached_head("1234567");

    let rows = rows(&source, 0);

    assert_eq!(rows[0].cells()[0].text, "1234567 *");
    assert_eq!(rows[1].cells()[0].text, "  feature");
  }

  #[test]
  fn hash_and_review_columns_at_verbosity_two() {
    struct OneReview;

    impl ReviewStatusSource for OneReview {
      fn fetch_statuses(
        &self,
        branches: &[String],
        _fine_grained: bool,
        _max_parallel: usize,
      ) -> Box<dyn Iterator<Item = ReviewStatus> + '_> {
        let statuses: Vec<_> = branches
          .iter()
          .map(|branch| match branch.as_str() {
            "feature" => ReviewStatus {
              branch: branch.clone(),
              url: Some("https://review.example/1".to_string()),
              state: ReviewState::Approved,
            },
            _ => ReviewStatus::unknown(branch),
          })
          .collect();
        Box::new(statuses.into_iter())
      }
    }

    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("origin/main")))
      .with_branch(branch("lost", "2222222", Some("missing")))
      .with_external("origin/main", Some("0000000"))
      .with_detached_head("9999999");

    let output = render_branch_map(&source, &OneReview, &options(2), 2, true).unwrap();

    assert_snapshot!(output, @r"
    {missing:GONE}
      lost            2222222 None
    origin/main       0000000 None
      feature         1111111 https://review.example/1
    ");
  }

  #[test]
  fn subject_column_is_appended() {
    let source = InMemorySource::new()
      .with_branch(branch("feature", "1111111", Some("origin/main")))
      .with_external("origin/main", None)
      .with_subject("feature", "Add the feature")
      .with_detached_head("9999999");
    let options = PresentationOptions {
      show_subject: true,
      ..options(0)
    };

    let output = render_branch_map(&source, &crate::review::NoReviewStatus, &options, 1, true).unwrap();

    assert_snapshot!(output, @r"
    origin/main
      feature      Add the feature
    ");
  }

  #[test]
  fn classification_follows_rule_order() {
    let namespaces = Namespaces::default();

    assert_eq!(classify(&namespaces, &facts("origin/main")), BranchClass::Remote);
    assert_eq!(classify(&namespaces, &facts("branch-heads/4044")), BranchClass::Release);
    assert_eq!(
      classify(
        &namespaces,
        &NodeFacts {
          tag: true,
          ..facts("v1.0")
        }
      ),
      BranchClass::Detached
    );
    assert_eq!(
      classify(
        &namespaces,
        &NodeFacts {
          invalid_parent: true,
          ..facts("")
        }
      ),
      BranchClass::Detached
    );
    assert_eq!(
      classify(
        &namespaces,
        &NodeFacts {
          at_head: true,
          ..facts("feature")
        }
      ),
      BranchClass::Current
    );
    assert_eq!(classify(&namespaces, &facts("feature")), BranchClass::Local);
  }

  #[test]
  fn remote_rule_wins_over_head_match() {
    let node = NodeFacts {
      at_head: true,
      tag: true,
      ..facts("origin/main")
    };

    assert_eq!(classify(&Namespaces::default(), &node), BranchClass::Remote);
    assert_eq!(weight(&node), Weight::Bright);
  }

  #[test]
  fn tag_root_uses_detached_color() {
    let source = InMemorySource::new()
      .with_branch(branch("rel", "3333333", Some("v1.0")))
      .with_external("v1.0", Some("4444444"))
      .with_tag("v1.0")
      .with_head("main", "9999999");

    let rows = rows(&source, 0);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells()[0].text, "v1.0");
    assert_eq!(rows[0].cells()[0].paint, Paint::color(AnsiColors::Magenta));
    assert_eq!(rows[1].cells()[0].text, "  rel");
    assert_eq!(rows[1].cells()[0].paint, Paint::color(AnsiColors::Green));
  }

  #[test]
  fn remote_roots_follow_the_source_remotes() {
    let source = InMemorySource::new()
      .with_branch(branch("topic", "5555555", Some("fork/main")))
      .with_external("fork/main", Some("6666666"))
      .with_remote("fork")
      .with_head("main", "9999999");
    let remotes = source.remote_names();
    let options = PresentationOptions {
      namespaces: Namespaces::for_remotes(remotes.as_slice(), Vec::new()),
      ..PresentationOptions::default()
    };
    let catalog = source.list_branches(false).unwrap();
    let forest = TopologyBuilder::new(&source).build(&catalog);
    let head = HeadContext::from_source(&source).unwrap();

    let forked = PresentationEngine::new(&source, &options).render(&catalog, forest, &head, &StatusTable::default());

    assert_eq!(forked[0].cells()[0].text, "fork/main");
    assert_eq!(forked[0].cells()[0].paint, Paint::color(AnsiColors::Red));

    let default_rows = rows(&source, 0);
    assert_eq!(default_rows[0].cells()[0].paint, Paint::color(AnsiColors::Green));
  }

  #[test]
  fn namespaces_follow_configured_remotes() {
    let namespaces = Namespaces::for_remotes(&["upstream", "fork"], vec![]);
    assert!(namespaces.is_remote("fork/main"));
    assert!(!namespaces.is_remote("origin/main"));
    assert!(!namespaces.is_release("branch-heads/1"));

    let fallback = Namespaces::for_remotes::<&str>(&[], vec!["release/".to_string()]);
    assert!(fallback.is_remote("origin/main"));
    assert!(fallback.is_release("release/1.2"));
  }
}

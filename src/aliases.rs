use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::store::ConfigStore;

/// How an alias expands when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// A git subcommand plus flags, invoked directly.
    Direct(&'static str),
    /// Run through the shell (stored with a leading `!`). Required for
    /// chained commands, positional parameters, and invocation-time command
    /// substitution. Parameterized entries use the `f() { ...; }; f` wrapper
    /// so `$1` binds correctly under git's argument forwarding.
    Shell(&'static str),
}

use Expansion::{Direct, Shell};

/// The full alias table. Names are unique by construction; the store's
/// last-write-wins semantics would apply if a duplicate ever slipped in.
pub const ALIASES: &[(&str, Expansion)] = &[
    // Status, staging, committing
    ("co", Direct("checkout")),
    ("cob", Direct("checkout -b")),
    ("back", Direct("checkout -")),
    ("discard", Direct("checkout --")),
    ("st", Direct("status")),
    ("ss", Direct("status -s")),
    ("sb", Direct("status -sb")),
    ("a", Direct("add")),
    ("aa", Direct("add --all")),
    ("ap", Direct("add --patch")),
    ("au", Direct("add --update")),
    ("ci", Direct("commit")),
    ("cm", Direct("commit -m")),
    ("ca", Direct("commit --amend")),
    ("can", Direct("commit --amend --no-edit")),
    ("amend", Direct("commit --amend --no-edit")),
    ("fixup", Direct("commit --fixup")),
    ("empty", Direct("commit --allow-empty -m")),
    ("acm", Shell("f() { git add -A && git commit -m \"$1\"; }; f")),
    ("cl", Direct("clone")),
    ("sw", Direct("switch")),
    ("swc", Direct("switch -c")),
    ("swm", Direct("switch main")),
    ("rst", Direct("restore")),
    ("rss", Direct("restore --staged")),
    // Fetch, pull, push, remotes
    ("f", Direct("fetch")),
    ("fa", Direct("fetch --all --prune")),
    ("pl", Direct("pull")),
    ("plr", Direct("pull --rebase")),
    ("ps", Direct("push")),
    ("psf", Direct("push --force-with-lease")),
    ("pst", Direct("push --tags")),
    ("psu", Direct("push -u origin HEAD")),
    ("publish", Shell("git push -u origin \"$(git rev-parse --abbrev-ref HEAD)\"")),
    (
        "unpublish",
        Shell("git push origin --delete \"$(git rev-parse --abbrev-ref HEAD)\""),
    ),
    ("sync", Shell("git pull --rebase && git push")),
    ("r", Direct("remote -v")),
    ("ra", Direct("remote add")),
    ("rrm", Direct("remote remove")),
    ("rpo", Direct("remote prune origin")),
    ("rso", Direct("remote show origin")),
    // Branches
    ("br", Direct("branch")),
    ("bra", Direct("branch -a")),
    ("brr", Direct("branch -r")),
    ("brd", Direct("branch -d")),
    ("brD", Direct("branch -D")),
    ("bm", Direct("branch --merged")),
    ("bnm", Direct("branch --no-merged")),
    ("bv", Direct("branch -vv")),
    ("renb", Direct("branch -m")),
    (
        "recent",
        Direct("branch --sort=-committerdate --format='%(committerdate:short) %(refname:short)'"),
    ),
    ("current", Direct("rev-parse --abbrev-ref HEAD")),
    ("upstream", Direct("rev-parse --abbrev-ref --symbolic-full-name @{u}")),
    (
        "track-all-remote-branches",
        Shell(
            "for b in $(git branch -r | grep -v ' -> '); do \
             git branch --track \"${b#origin/}\" \"$b\" 2>/dev/null; done; git fetch --all",
        ),
    ),
    (
        "bdm",
        Shell("git branch --merged | grep -v '\\*\\|main\\|master' | xargs -r git branch -d"),
    ),
    // History
    ("l", Direct("log --oneline")),
    ("lg", Direct("log --oneline --graph --decorate")),
    ("lga", Direct("log --oneline --graph --decorate --all")),
    (
        "ll",
        Direct("log --pretty=format:'%C(yellow)%h%Creset %s %Cgreen(%cr) %C(bold blue)<%an>%Creset'"),
    ),
    ("lp", Direct("log --patch")),
    ("lst", Direct("log --stat")),
    ("last", Direct("log -1 HEAD --stat")),
    (
        "hist",
        Direct("log --pretty=format:'%h %ad | %s%d [%an]' --graph --date=short"),
    ),
    ("graph", Direct("log --graph --abbrev-commit --decorate --all")),
    ("overview", Direct("log --all --since='2 weeks' --oneline --no-merges")),
    (
        "today",
        Shell("git log --since=midnight --author=\"$(git config user.name)\" --oneline"),
    ),
    (
        "standup",
        Shell("git log --since='yesterday' --author=\"$(git config user.name)\" --oneline"),
    ),
    (
        "recap",
        Shell("git log --all --oneline --no-merges --author=\"$(git config user.email)\""),
    ),
    ("contributors", Direct("shortlog --summary --numbered")),
    ("authors", Direct("shortlog -sne")),
    ("filelog", Direct("log -u")),
    ("lasttag", Direct("describe --tags --abbrev=0")),
    ("tags", Direct("tag -l")),
    ("releases", Direct("tag -l --sort=-version:refname")),
    ("count", Direct("rev-list --count HEAD")),
    ("timeline", Direct("log --format='%C(green)%ad%Creset %s' --date=short")),
    ("whatadded", Direct("log --follow --diff-filter=A --")),
    // Searching
    (
        "find",
        Shell("f() { git log --pretty=format:'%C(yellow)%h %Creset%s' --grep=\"$1\"; }; f"),
    ),
    ("findfile", Shell("f() { git ls-files | grep -i \"$1\"; }; f")),
    ("pickaxe", Shell("f() { git log -S \"$1\" --oneline; }; f")),
    ("grepall", Direct("grep -Ii")),
    ("who", Direct("blame -w")),
    ("conflicted", Direct("diff --name-only --diff-filter=U")),
    // Diffs
    ("d", Direct("diff")),
    ("dc", Direct("diff --cached")),
    ("dst", Direct("diff --stat")),
    ("dw", Direct("diff --word-diff")),
    ("dl", Direct("diff HEAD~1 HEAD")),
    ("dt", Direct("difftool")),
    ("dcs", Direct("diff --cached --stat")),
    ("changes", Direct("diff --name-status")),
    ("dmain", Direct("diff main...HEAD")),
    ("du", Direct("diff @{u}")),
    // Merging, rebasing, cherry-picking
    ("m", Direct("merge")),
    ("ma", Direct("merge --abort")),
    ("mc", Direct("merge --continue")),
    ("mnf", Direct("merge --no-ff")),
    ("rb", Direct("rebase")),
    ("rba", Direct("rebase --abort")),
    ("rbc", Direct("rebase --continue")),
    ("rbs", Direct("rebase --skip")),
    ("rbi", Direct("rebase -i")),
    (
        "rbm",
        Shell("f() { git rebase -i \"$(git merge-base HEAD \"${1:-main}\")\"; }; f"),
    ),
    ("cp", Direct("cherry-pick")),
    ("cpa", Direct("cherry-pick --abort")),
    ("cpc", Direct("cherry-pick --continue")),
    // Stash
    ("sl", Direct("stash list")),
    ("sa", Direct("stash apply")),
    ("sp", Direct("stash pop")),
    ("spu", Direct("stash push")),
    ("spum", Direct("stash push -m")),
    ("sshow", Direct("stash show -p")),
    ("sdrop", Direct("stash drop")),
    ("sclear", Direct("stash clear")),
    (
        "snap",
        Shell("git stash push -m \"snapshot: $(date)\" && git stash apply 'stash@{0}'"),
    ),
    // Undo, reset, cleanup
    ("unstage", Direct("reset HEAD --")),
    ("undo", Direct("reset --soft HEAD~1")),
    ("uncommit", Direct("reset --mixed HEAD~1")),
    ("rh", Direct("reset --hard")),
    ("rh1", Direct("reset --hard HEAD~1")),
    ("nevermind", Shell("git reset --hard HEAD && git clean -df")),
    ("panic", Shell("git reset --hard && git clean -dfx")),
    ("cleanout", Shell("git clean -df && git checkout -- .")),
    (
        "wipe",
        Shell("git add -A && git commit -qm 'WIPE SAVEPOINT' && git reset HEAD~1 --hard"),
    ),
    (
        "save",
        Shell("git add -A && git commit -m \"SAVEPOINT $(date +%Y-%m-%d_%H:%M:%S)\""),
    ),
    ("wip", Shell("git add -u && git commit -m 'WIP'")),
    (
        "unwip",
        Shell(
            "git log -1 --pretty=%s | grep -q '^WIP' && git reset --soft HEAD~1 \
             || echo 'No WIP commit to undo'",
        ),
    ),
    // Ignoring and untracking
    ("ignore", Shell("f() { echo \"$1\" >> .gitignore; }; f")),
    ("ignored", Direct("ls-files --others --ignored --exclude-standard")),
    ("untrack", Direct("rm -r --cached")),
    ("assume", Direct("update-index --assume-unchanged")),
    ("unassume", Direct("update-index --no-assume-unchanged")),
    ("assumed", Shell("git ls-files -v | grep '^h' | cut -c 3-")),
    // Inspection
    ("root", Direct("rev-parse --show-toplevel")),
    ("sha", Direct("rev-parse HEAD")),
    ("shas", Direct("rev-parse --short HEAD")),
    ("whoami", Shell("git config user.name && git config user.email")),
    (
        "aliases",
        Shell("git config --get-regexp '^alias\\.' | sed 's/^alias\\.//' | sort"),
    ),
    ("it", Shell("git init && git commit --allow-empty -m 'Initial commit'")),
    ("fp", Direct("format-patch")),
    ("human", Direct("name-rev --name-only --refs=refs/heads/*")),
    ("type", Direct("cat-file -t")),
    ("dump", Direct("cat-file -p")),
    (
        "refs",
        Direct("for-each-ref --sort=-committerdate --format='%(refname:short) %(committerdate:short)'"),
    ),
    ("headlog", Direct("reflog -10")),
    // Worktrees and submodules
    ("wt", Direct("worktree list")),
    ("wta", Direct("worktree add")),
    ("wtr", Direct("worktree remove")),
    ("subup", Direct("submodule update --init --recursive")),
    ("subst", Direct("submodule status")),
    ("subpull", Shell("git submodule foreach git pull origin main")),
    // Tags
    ("tg", Direct("tag")),
    ("tga", Direct("tag -a")),
    ("tgd", Direct("tag -d")),
];

/// Number of aliases in the registration table.
pub fn count() -> usize {
    ALIASES.len()
}

/// Write every alias into the store under the `alias.` namespace.
pub fn register_aliases(store: &dyn ConfigStore) -> Result<()> {
    info!("Registering {} aliases", count());
    for (name, expansion) in ALIASES {
        let key = format!("alias.{name}");
        match expansion {
            Direct(cmd) => store.write(&key, cmd)?,
            Shell(cmd) => store.write(&key, &format!("!{cmd}"))?,
        }
    }
    if store.is_dry_run() {
        println!(
            "{}",
            format!("DRY-RUN: Would register {} aliases", count()).cyan()
        );
    } else {
        println!("{}", format!("✅ {} aliases registered", count()).green());
    }
    Ok(())
}

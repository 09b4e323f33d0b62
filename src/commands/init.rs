//! Initialize a new notes site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a site in the given directory
///
/// Writes a catalog with three sample categories and matching note files so
/// `serve`, `list` and `show` work out of the box.
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("data/english"))?;
    fs::create_dir_all(target_dir.join("data/japanese"))?;
    fs::create_dir_all(target_dir.join("data/bookclub"))?;

    // Create default _catalog.yml
    let catalog_content = r#"# meetnotes catalog
## Category keys map to folders under the data directory.
## Each file's first line is its title; the rest is the note body (HTML).

# Site
title: Meeting Notes
language: en

# Directory
data_dir: data

# Viewer
default_category: english
player:
  enable: false
  # site-relative audio path, e.g. audio/bgm.mp3
  src: ''
  loop: true

# Content
categories:
  english:
    path: english
    label: ENGLISH MEETING
    files:
      - meetup_002.txt
      - meetup_001.txt
  japanese:
    path: japanese
    label: 日本語集まり
    files:
      - meetup_jp_001.txt
  bookclub:
    path: bookclub
    label: 독서회
    files:
      - book_001.txt
"#;

    fs::write(target_dir.join("_catalog.yml"), catalog_content)?;

    // Sample notes
    let meetup_002 = "2024-06-08 English Meetup #2\n\
<p>Topic: <b>travel stories</b>.</p>\n\
<p>We meet at the usual cafe at 7pm. Bring one photo from a trip you loved.</p>\n";

    let meetup_001 = "2024-05-11 English Meetup #1\n\
<p>Kick-off session. Introductions and a short conversation game.</p>\n";

    let meetup_jp_001 = "2024-05-18 日本語の集まり\n\
<p>テーマ：<b>週末の過ごし方</b>。初心者歓迎です。</p>\n";

    let book_001 = "2024-05-25 독서회 첫 모임\n\
<p>이번 달의 책: <i>데미안</i>. 1~3장을 읽고 오세요.</p>\n";

    fs::write(target_dir.join("data/english/meetup_002.txt"), meetup_002)?;
    fs::write(target_dir.join("data/english/meetup_001.txt"), meetup_001)?;
    fs::write(
        target_dir.join("data/japanese/meetup_jp_001.txt"),
        meetup_jp_001,
    )?;
    fs::write(target_dir.join("data/bookclub/book_001.txt"), book_001)?;

    Ok(())
}

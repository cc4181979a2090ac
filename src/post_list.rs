use std::path::PathBuf;
use std::{fs, io};

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            if let Ok(entry) = entry {
                if let Ok(file_type) = entry.file_type() {
                    if !file_type.is_file() {
                        continue;
                    }
                    let file_name = entry.file_name();
                    if let Some(file_name) = file_name.to_str() {
                        // Posts are plain .txt files in the root of the posts dir
                        if file_name.ends_with(".txt") {
                            posts.push(entry.path());
                        }
                    }
                }
            }
        }

        // read_dir order is platform dependent
        posts.sort();

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_retrieves_only_txt_files() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("b.txt"), "b")?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(dir.path().join("notes.md"), "m")?;
        fs::create_dir(dir.path().join("drafts.txt"))?;

        let post_list = PostList {
            root_dir: dir.path().to_path_buf(),
        };
        let files = post_list.retrieve_files()?;

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let post_list = PostList {
            root_dir: PathBuf::from("/no/such/dir"),
        };
        assert!(post_list.retrieve_files().is_err());
    }
}

use std::sync::{Arc, LockResult, Mutex, MutexGuard};

use camino::{Utf8Path, Utf8PathBuf};

use super::{Catalog, LoadError};

// Let's keep the possible events simpler for our needs
#[derive(Debug, PartialEq)]
enum FsEvent {
    Rename,
    Edit,
    Create,
    Delete,
    Ignored,
    Unhandled(notify::EventKind),
}

impl From<notify::EventKind> for FsEvent {
    fn from(event_kind: notify::EventKind) -> Self {
        use notify::event::{
            AccessKind, AccessMode, CreateKind, DataChange, EventKind, ModifyKind, RemoveKind,
            RenameMode,
        };
        match event_kind {
            EventKind::Modify(ModifyKind::Name(RenameMode::Any)) => Self::Rename,
            EventKind::Modify(ModifyKind::Data(DataChange::Content | DataChange::Any)) => {
                Self::Edit
            }
            EventKind::Remove(RemoveKind::File) => Self::Delete,
            EventKind::Create(CreateKind::File) => Self::Create,
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => Self::Ignored,
            unhandled => Self::Unhandled(unhandled),
        }
    }
}

/// Owns the loaded catalog and knows where it came from, so file events can
/// reload it in place.
pub struct Keeper {
    path: Utf8PathBuf,
    catalog: Catalog,
}

impl Keeper {
    pub fn new(path: &Utf8Path) -> Result<Self, LoadError> {
        let catalog = Catalog::read_from_path(path)?;
        Ok(Keeper {
            path: path.to_owned(),
            catalog,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn reload(&mut self) {
        match Catalog::read_from_path(&self.path) {
            Ok(catalog) => {
                println!("Reloaded catalog ({} items)", catalog.items.len());
                self.catalog = catalog;
            }
            // A half-saved edit keeps the previous catalog in service.
            Err(err) => eprintln!("Couldn't reload catalog ({:?}): {err}", self.path),
        }
    }
}

#[derive(Clone)]
pub struct ArcMutex(pub Arc<Mutex<Keeper>>);

impl ArcMutex {
    #[must_use]
    pub fn new(keeper: Keeper) -> Self {
        Self(Arc::new(Mutex::new(keeper)))
    }

    pub fn lock(&self) -> LockResult<MutexGuard<'_, Keeper>> {
        self.0.as_ref().lock()
    }
}

impl notify::EventHandler for ArcMutex {
    fn handle_event(&mut self, event: notify::Result<notify::Event>) {
        match event {
            Ok(notify::Event {
                kind,
                paths,
                attrs: _,
            }) => {
                let path = paths.first().expect("event must have at least one path");
                let path = match Utf8PathBuf::try_from(path.clone()) {
                    Ok(path) => path,
                    Err(err) => {
                        eprintln!("Event filepath ({path:?}) was not UTF-8: {err}\n\nNon-UTF-8 paths not supported.");
                        return;
                    }
                };
                let mut keeper = match self.lock() {
                    Ok(keeper) => keeper,
                    Err(err) => {
                        eprintln!("Failed to lock catalog during notify event: {err}");
                        return;
                    }
                };
                if path != keeper.path {
                    return;
                }
                match FsEvent::from(kind) {
                    FsEvent::Rename | FsEvent::Edit | FsEvent::Create => {
                        keeper.reload();
                    }
                    FsEvent::Delete => {
                        eprintln!(
                            "Catalog file ({path:?}) was removed; keeping last loaded catalog"
                        );
                    }
                    FsEvent::Ignored => (),
                    FsEvent::Unhandled(event) => println!("unhandled watch event: {event:?}"),
                }
            }
            Err(e) => println!("watch error: {e:?}"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use camino::Utf8PathBuf;
    use notify::event::{DataChange, EventKind, ModifyKind};
    use notify::EventHandler;

    use super::{ArcMutex, Keeper};

    const VALID: &str = "site:\n\
        \x20 name: Hub\n\
        \x20 base_url: https://example.org\n\
        \x20 publisher: Resinaro\n\
        \x20 default_image: /images/default.png\n\
        items:\n\
        \x20 - title: One\n\
        \x20   description: First.\n\
        \x20   slug: community/one\n\
        \x20   category: housing\n";

    struct TestFile {
        path: Utf8PathBuf,
    }

    impl TestFile {
        fn create(name: &str, contents: &str) -> std::io::Result<Self> {
            let wd = Utf8PathBuf::try_from(std::env::temp_dir()).unwrap();
            let file = TestFile {
                path: wd.join(name),
            };
            file.write(contents)?;
            Ok(file)
        }

        fn write(&self, contents: &str) -> std::io::Result<()> {
            let mut file = std::fs::File::create(&self.path)?;
            write!(file, "{contents}")?;
            Ok(())
        }
    }

    impl Drop for TestFile {
        fn drop(&mut self) {
            if self.path.exists() {
                std::fs::remove_file(&self.path).unwrap();
            }
        }
    }

    fn edit_event(path: &Utf8PathBuf) -> notify::Event {
        notify::Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(path.clone().into_std_path_buf())
    }

    #[test]
    fn reloads_on_edit() {
        let test_file = TestFile::create("piazza-keeper-reload.yaml", VALID).unwrap();
        let mut keeper = ArcMutex::new(Keeper::new(&test_file.path).unwrap());

        let with_second_item = format!(
            "{VALID}\
             \x20 - title: Two\n\
             \x20   description: Second.\n\
             \x20   slug: community/two\n\
             \x20   category: banking\n"
        );
        test_file.write(&with_second_item).unwrap();
        keeper.handle_event(Ok(edit_event(&test_file.path)));

        let keeper = keeper.lock().unwrap();
        assert_eq!(2, keeper.catalog().items.len());
    }

    #[test]
    fn keeps_previous_catalog_on_bad_edit() {
        let test_file = TestFile::create("piazza-keeper-bad-edit.yaml", VALID).unwrap();
        let mut keeper = ArcMutex::new(Keeper::new(&test_file.path).unwrap());

        test_file.write("items: [not, a, catalog").unwrap();
        keeper.handle_event(Ok(edit_event(&test_file.path)));

        let keeper = keeper.lock().unwrap();
        assert_eq!(1, keeper.catalog().items.len());
        assert_eq!("community/one", keeper.catalog().items[0].slug);
    }

    #[test]
    fn ignores_events_for_other_paths() {
        let test_file = TestFile::create("piazza-keeper-other.yaml", VALID).unwrap();
        let mut keeper = ArcMutex::new(Keeper::new(&test_file.path).unwrap());

        let other = TestFile::create("piazza-keeper-unrelated.yaml", "not yaml at all: [").unwrap();
        keeper.handle_event(Ok(edit_event(&other.path)));

        let keeper = keeper.lock().unwrap();
        assert_eq!(1, keeper.catalog().items.len());
    }
}

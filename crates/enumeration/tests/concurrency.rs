use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, LazyLock};
use std::thread;

use smart_enumeration::{Enumeration, Member, Registry, RegistryBuilder};

static SCANS: AtomicUsize = AtomicUsize::new(0);

/// Hand-written enumeration that counts registry builds.
#[derive(Debug, PartialEq, Eq)]
struct Counted {
	member: Member<i32>,
}

static ONE: Counted = Counted {
	member: Member::new(1, "One"),
};
static TWO: Counted = Counted {
	member: Member::new(2, "Two"),
};
static THREE: Counted = Counted {
	member: Member::new(3, "Three"),
};

impl Enumeration for Counted {
	type Value = i32;

	const TYPE_NAME: &'static str = "Counted";

	fn member(&self) -> &Member<i32> {
		&self.member
	}

	fn registry() -> &'static Registry<Self> {
		static REGISTRY: LazyLock<Registry<Counted>> = LazyLock::new(|| {
			SCANS.fetch_add(1, Ordering::SeqCst);
			// Widen the race window for concurrent first access.
			thread::sleep(std::time::Duration::from_millis(20));
			RegistryBuilder::new("Counted")
				.extend([&ONE, &TWO, &THREE])
				.build()
		});
		&REGISTRY
	}
}

#[test]
fn registry_builds_exactly_once_under_contention() {
	const THREADS: usize = 16;
	let barrier = Arc::new(Barrier::new(THREADS));

	let handles: Vec<_> = (0..THREADS)
		.map(|i| {
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				let value = (i % 3) as i32 + 1;
				let member = Counted::from_value(&value).map(|m| m as *const Counted as usize);
				(Counted::all().len(), member)
			})
		})
		.collect();

	for handle in handles {
		let (len, member) = handle.join().unwrap();
		// No caller ever sees a partially populated registry.
		assert_eq!(len, 3);
		assert!(member.is_ok());
	}

	assert_eq!(SCANS.load(Ordering::SeqCst), 1);

	// Later calls hit the cache.
	let _ = Counted::all();
	let _ = Counted::try_from_display_name("Two");
	assert_eq!(SCANS.load(Ordering::SeqCst), 1);
}

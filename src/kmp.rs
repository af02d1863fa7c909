//! Knuth-Morris-Pratt substring search.
//!
//! Works on any slice of comparable items. The `_str` helpers search on bytes, so the returned
//! positions are byte offsets that can be used to slice the haystack directly: a valid UTF-8
//! needle can never match starting in the middle of a character.

///Failure function of `needle`.
///
///Entry `i` is the length of the longest proper prefix of `needle[..i]` that is also its suffix,
///`None` at index 0 where no such prefix exists.
pub fn build_failure<T: PartialEq>(needle: &[T]) -> Vec<Option<usize>> {
	build(needle, false)
}

///"Next-val" variant: a fallback that would compare the same item again is skipped in advance.
///Finds the same matches as [`build_failure`], with fewer comparisons on repetitive needles.
pub fn build_failure_optimized<T: PartialEq>(needle: &[T]) -> Vec<Option<usize>> {
	build(needle, true)
}

fn build<T: PartialEq>(needle: &[T], optimize: bool) -> Vec<Option<usize>> {
	let mut next = vec![None; needle.len()];
	let (mut j, mut k) = (0, None);
	while j + 1 < needle.len() {
		match k {
			Some(kk) if needle[j] != needle[kk] => {k = next[kk];}
			_ => {
				j += 1;
				let kk = k.map_or(0, |kk| kk + 1);
				k = Some(kk);
				next[j] = if optimize && needle[j] == needle[kk] {next[kk]} else {k};
			}
		}
	}
	next
}

///Scan `haystack` for `needle` starting at the beginning.
///
///Returns the index of the first occurrence, or `None` if there is none,
///the needle is empty or longer than the haystack.
pub fn find<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
	find_with(haystack, needle, &build_failure(needle))
}

///[`find`] with a precomputed failure table (either variant)
pub fn find_with<T: PartialEq>(haystack: &[T], needle: &[T], next: &[Option<usize>]) -> Option<usize> {
	if needle.is_empty() || haystack.len() < needle.len() {return None;}

	let (mut j, mut k) = (0, Some(0));
	while j < haystack.len() {
		match k {
			Some(kk) if kk == needle.len() => {break;}
			Some(kk) if haystack[j] != needle[kk] => {k = next[kk];}
			_ => {
				j += 1;
				k = Some(k.map_or(0, |kk| kk + 1));
			}
		}
	}

	(k == Some(needle.len())).then(|| j - needle.len())
}

///Number of occurrences of `needle` in `haystack`, overlapping ones included.
pub fn find_count<T: PartialEq>(haystack: &[T], needle: &[T]) -> usize {
	if needle.is_empty() || haystack.len() < needle.len() {return 0;}

	let next = build_failure(needle);
	let mut count = 0;
	let (mut j, mut k) = (0, Some(0));
	while j < haystack.len() {
		match k {
			Some(kk) if haystack[j] != needle[kk] => {k = next[kk];}
			_ => {
				j += 1;
				let kk = k.map_or(0, |kk| kk + 1);
				k = Some(kk);
				if kk == needle.len() {
					count += 1;
					k = next[kk - 1];	//resume inside the match so overlaps are seen
					j -= 1;
				}
			}
		}
	}
	count
}

#[inline(always)]
///byte offset of the first occurrence of `needle` in `haystack`
pub fn find_str(haystack: &str, needle: &str) -> Option<usize> {
	find(haystack.as_bytes(), needle.as_bytes())
}

#[inline(always)]
///overlapping occurrence count of `needle` in `haystack`
pub fn count_str(haystack: &str, needle: &str) -> usize {
	find_count(haystack.as_bytes(), needle.as_bytes())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failure_table() {
		assert_eq!(build_failure(b"abcab"), vec![None, Some(0), Some(0), Some(0), Some(1)]);
		assert_eq!(build_failure(b"aaaa"), vec![None, Some(0), Some(1), Some(2)]);
		assert_eq!(build_failure(b"abab"), vec![None, Some(0), Some(0), Some(1)]);
		assert_eq!(build_failure_optimized(b"aaaa"), vec![None, None, None, None]);
		assert_eq!(build_failure_optimized(b"abab"), vec![None, Some(0), None, Some(0)]);
		assert!(build_failure::<u8>(b"").is_empty());
	}

	#[test]
	fn first_match() {
		assert_eq!(find_str("ababcabab", "abcab"), Some(2));
		assert_eq!(find_str("abcab", "abcab"), Some(0));
		assert_eq!(find_str("xxabcab", "abcab"), Some(2));
		assert_eq!(find_str("aaab", "aab"), Some(1));
		assert_eq!(find_str("ababab", "abac"), None);
		assert_eq!(find_str("ab", "abc"), None);
		assert_eq!(find_str("abc", ""), None);
		assert_eq!(find_str("", "a"), None);
	}

	#[test]
	fn optimized_table_finds_the_same() {
		let hay = b"aabaabaaabaabaaab";
		for needle in [&b"aaab"[..], b"abaab", b"baaab", b"aa", b"b", b"aabaaa"] {
			assert_eq!(
				find_with(hay, needle, &build_failure_optimized(needle)),
				find(hay, needle)
			);
		}
	}

	#[test]
	fn overlapping_count() {
		assert_eq!(count_str("aaaa", "aa"), 3);
		assert_eq!(count_str("aaaa", "a"), 4);
		assert_eq!(count_str("ababab", "abab"), 2);
		assert_eq!(count_str("abcabc", "cab"), 1);
		assert_eq!(count_str("abc", "d"), 0);
		assert_eq!(count_str("abc", ""), 0);
		assert_eq!(count_str("a", "aa"), 0);
	}

	#[test]
	fn multibyte_offsets_are_slice_safe() {
		let msg = "请计算 1+1";
		let i = find_str(msg, "计算").unwrap();
		assert_eq!(i, 3);
		assert_eq!(&msg[i + "计算".len()..], " 1+1");
	}

	#[test]
	fn generic_items() {
		assert_eq!(find(&[1, 2, 1, 2, 3], &[1, 2, 3]), Some(2));
		assert_eq!(find_count(&['x'; 5], &['x', 'x']), 4);
	}
}

use rs2_optional_stream::pipe;
use rs2_optional_stream::pipe::*;
use rs2_optional_stream::Stream;

#[test]
fn test_pipe_map() {
    let stream = Stream::from_vec(vec![1, 2, 3, 4, 5]);
    let pipe = map(|x: &i32| x * 2);

    let result = pipe.apply(&stream);
    assert_eq!(result.to_slice(), &[2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_filter() {
    let stream = Stream::from_vec(vec![1, 2, 3, 4, 5]);
    let pipe = pipe::filter(|x: &i32| x % 2 == 0);

    let result = pipe.apply(&stream);
    assert_eq!(result.to_slice(), &[2, 4]);
}

#[test]
fn test_pipe_compose() {
    let stream = Stream::from_vec(vec![1, 2, 3, 4, 5]);

    let double = pipe::map(|x: &i32| x * 2);
    let even_only = pipe::filter(|x: &i32| x % 2 == 0);

    // After doubling, all numbers are even, so all should pass the filter
    let pipe = pipe::compose(double, even_only);

    let result = pipe.apply(&stream);
    assert_eq!(result.to_slice(), &[2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_identity_shares_storage() {
    let stream = Stream::from_vec(vec![1, 2, 3, 4, 5]);
    let pipe = pipe::identity();

    let result = pipe.apply(&stream);
    assert_eq!(result.to_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(result.to_slice().as_ptr(), stream.to_slice().as_ptr());
}

#[test]
fn test_pipe_ext_compose() {
    let stream = Stream::from_vec(vec![1, 2, 3, 4, 5]);

    let double = pipe::map(|x: &i32| x * 2);
    let to_string = pipe::map(|x: &i32| x.to_string());

    let pipe = double.compose(to_string);

    let result = pipe.apply(&stream);
    assert_eq!(result.to_vec(), vec!["2", "4", "6", "8", "10"]);
}

#[test]
fn test_pipe_sorted_is_reusable() {
    let by_len = pipe::sorted(|a: &&str, b: &&str| a.len().cmp(&b.len()));

    let first = by_len.apply(&Stream::from_array(["ccc", "a", "bb"]));
    let second = by_len.clone().apply(&Stream::from_array(["dd", "e", "ff", "g"]));

    assert_eq!(first.to_slice(), &["a", "bb", "ccc"]);
    assert_eq!(second.to_slice(), &["e", "g", "dd", "ff"]);
}

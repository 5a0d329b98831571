use std::fmt::UpperHex;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// представить массив чисел в текстовом виде
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    format_vec(input, boundary, |&e| match e.into() == 0 {
        true => "0".to_owned(),
        false => format!("0x{:X}", e),
    })
}

/// представить массив элементов с произвольным форматированием,
/// перенося строки по достижении границы
pub fn format_vec<T>(input: &[T], boundary: usize, format: impl Fn(&T) -> String) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for e in input {
        let e_str = format!("{}, ", format(e));

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }

    output.push('\n');

    output
}

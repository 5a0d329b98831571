use super::PropertiesError;

/// числовое значение символа
///
/// обыкновенные дроби (например, U+00BC = 1/4) хранятся точно, парой
/// числитель / знаменатель - превращать их в плавающую точку внутри
/// компилятора нельзя, точность теряется безвозвратно. Float встречается
/// только в дополнительных источниках с десятичной записью
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue
{
    /// целое значение
    Integer(i64),
    /// точная рациональная дробь: числитель / знаменатель
    Rational(i64, u64),
    /// приближенное значение
    Float(f64),
}

impl TryFrom<&str> for NumericValue
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        if let Some((num, den)) = value.split_once('/') {
            let den: u64 = den.parse()?;

            if den == 0 {
                return Err(PropertiesError::UnknownPropertyValue);
            }

            return Ok(Self::Rational(num.parse()?, den));
        }

        match value.contains('.') {
            true => Ok(Self::Float(
                value
                    .parse()
                    .map_err(|_| PropertiesError::UnknownPropertyValue)?,
            )),
            false => Ok(Self::Integer(value.parse()?)),
        }
    }
}

/// числовой тип (Numeric Type / Numeric Value)
/// берется из UCD: 7, 8, 9 колонки UnicodeData.txt
///
/// Decimal влечет Digit, Digit влечет Numeric - в UnicodeData.txt
/// соответствующие колонки заполняются каскадом
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericType
{
    /// не является числовым символом
    #[default]
    None,
    /// десятичная цифра в позиционной записи, 0 - 9
    Decimal(u8),
    /// цифра вне позиционной записи (надстрочные и т.п.), 0 - 9
    Digit(u8),
    /// числовое значение общего вида
    Numeric(NumericValue),
}

impl NumericType
{
    pub fn is_some(&self) -> bool
    {
        !matches!(self, NumericType::None)
    }

    pub fn is_none(&self) -> bool
    {
        matches!(self, NumericType::None)
    }
}

impl TryFrom<(&str, &str, &str)> for NumericType
{
    type Error = PropertiesError;

    fn try_from(v: (&str, &str, &str)) -> Result<Self, Self::Error>
    {
        let mask = u8::from(!v.0.is_empty())
            | u8::from(!v.1.is_empty()) << 1
            | u8::from(!v.2.is_empty()) << 2;

        let value = match mask {
            0b111 => Self::Decimal(v.0.parse()?),
            0b110 => Self::Digit(v.1.parse()?),
            0b100 => Self::Numeric(NumericValue::try_from(v.2)?),
            0b000 => Self::None,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        };

        Ok(value)
    }
}

#[cfg(test)]
pub const POST_DATA: &str = "[Title]
What I learned after 20 years of blogging
[Date]
04/02/2022
[Thumbnail]
images/learned.png
[Category]
career
[Content]
How to be a great software engineer?

Someone asked me this question today and I didn't have an answer.
\\[Spoiler] There is no single answer.
";

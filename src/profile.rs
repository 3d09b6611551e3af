//! Static profile content rendered by the page sections.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub skills: &'static [&'static str],
    pub education: &'static [Education],
    pub email: &'static str,
    pub socials: &'static [SocialLink],
}

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Nevil Amraniya",
    tagline: "Fresher AI/ML Enthusiast based in Essen, Germany.",
    about: "I\u{2019}m passionate about Artificial Intelligence and Machine Learning, \
            eager to explore data, build predictive models, and create impactful \
            applications. Currently pursuing a BSc in Computer Science and Digital \
            Technologies at FOM University of Applied Sciences, Essen, Germany.",
    skills: &[
        "Python",
        "NumPy",
        "Pandas",
        "Flask",
        "Java",
        "scikit-learn",
        "TensorFlow",
        "PyTorch",
        "Keras",
        "Matplotlib",
        "Statistics",
        "Calculus",
    ],
    education: &[
        Education {
            degree: "BSc in Computer Science and Digital Technologies",
            school: "FOM University of Applied Science, Essen, Germany (2025\u{2013}2028)",
        },
        Education {
            degree: "Diploma in Computer Engineering",
            school: "Government Polytechnic Jamnagar, India (2019\u{2013}2023)",
        },
        Education { degree: "Schooling", school: "Krishna Science School, Jamnagar (2019)" },
    ],
    email: "framesofnevil@gmail.com",
    socials: &[
        SocialLink { label: "Instagram", href: "https://www.instagram.com/nevilamraniya07" },
        SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/nevil-amraniya-51b202317/" },
        SocialLink { label: "Twitter", href: "https://twitter.com/nevilamraniya01" },
        SocialLink { label: "Medium", href: "https://medium.com/@qnztrrfn" },
    ],
};

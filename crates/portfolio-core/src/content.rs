//! Biographical content shown on the home, about and contact pages.

/// A headline number on the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A service highlight on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Everything about the site owner that isn't a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub summary: &'static str,
    /// Rotating hero titles.
    pub roles: &'static [&'static str],
    pub bio: &'static [&'static str],
    pub stats: &'static [Stat],
    pub skills: &'static [&'static str],
    /// Extra skill tiles that only appear on the home page.
    pub showcase_skills: &'static [&'static str],
    pub services: &'static [Service],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub certifications: &'static [Certification],
    pub contact: ContactDetails,
    pub socials: &'static [SocialLink],
}

impl Profile {
    /// Skill tiles for the home page.
    pub fn home_skills(&self) -> impl Iterator<Item = &'static str> {
        self.skills.iter().chain(self.showcase_skills).copied()
    }

    /// Skill tiles for the about page.
    pub fn about_skills(&self) -> &'static [&'static str] {
        self.skills
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("\u{a9} {year} {}. All rights reserved.", self.name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Pavan S",
    summary: "AWS-certified full-stack developer with experience in React.js and React Native, building responsive, cross-platform applications.",
    roles: &["Full Stack Developer", "React Native Developer", "AWS Certified"],
    bio: &[
        "I'm Pavan S, an AWS-certified full-stack developer with practical experience in React.js and React Native, proficient in building responsive, cross-platform applications using a component-based architecture.",
        "Skilled in integrating Supabase for backend services and authentication. Passionate about scalable frontend systems and modern Agile workflows with version control best practices.",
        "With experience in both frontend and backend development, I bring a comprehensive approach to creating digital solutions that are both functional and user-friendly.",
    ],
    stats: &[
        Stat { value: "5+ Months", label: "Industry Experience" },
        Stat { value: "4+", label: "Projects" },
        Stat { value: "AWS", label: "Certified" },
        Stat { value: "8.2", label: "CGPA" },
    ],
    skills: &[
        "React.js",
        "React Native",
        "HTML",
        "CSS",
        "JavaScript",
        "Bootstrap",
        "Ant Design",
        "Node.js",
        "Express.js",
        "Supabase",
        "MongoDB",
        "REST APIs",
        "Git",
        "GitHub",
        "Postman",
        "VS Code",
        "Figma",
        "Responsive Design",
    ],
    showcase_skills: &["Lynkt Teacher App (React Native)", "Lynkt Admin Web Application"],
    services: &[
        Service {
            title: "Frontend Development",
            summary: "Building responsive web apps with React.js and mobile apps with React Native",
        },
        Service {
            title: "Backend Integration",
            summary: "Implementing backend services with Node.js, Express, and Supabase.",
        },
        Service {
            title: "Full Stack",
            summary: "Creating complete MERN stack applications with responsive design.",
        },
    ],
    experience: &[
        Experience {
            title: "Frontend Developer Intern",
            company: "Yahweh Software Solution",
            period: "Feb 2025 - Present",
            description: "Built cross-platform mobile apps using React Native for Android and iOS devices. Integrated RESTful APIs and implemented state management with Redux. Optimized UI components and collaborated in Agile sprints. Built modular UIs using component-based architecture in React and React Native for scalability.",
        },
        Experience {
            title: "MERN Full Stack Intern",
            company: "Xcel Corp, Bengaluru",
            period: "July 2024 - August 2024",
            description: "Collaborated with the development team to build full-stack web applications using the MERN stack (MongoDB, Express.js, React.js, Node.js). Developed and enhanced features, including implementing a password update functionality on user profile pages. Immersed in XCEL Corp's professional work culture, learning efficient coding practices and teamwork dynamics.",
        },
    ],
    education: &[
        Education {
            degree: "Master of Computer Application (MCA)",
            institution: "St. Francis College, Bengaluru City University",
            period: "2022 - 2024",
            grade: "CGPA: 8.22",
        },
        Education {
            degree: "Bachelor of Computer Application (BCA)",
            institution: "RJS First Grade College, Bengaluru City University",
            period: "2019 - 2022",
            grade: "CGPA: 8.5",
        },
    ],
    certifications: &[Certification {
        name: "AWS Certified Cloud Practitioner",
        summary: "Demonstrated foundational knowledge of AWS Cloud concepts, services, and best practices to support cloud adoption.",
    }],
    contact: ContactDetails {
        email: "gowdapavan026@gmail.com",
        location: "Bengaluru, India",
        phone: "+91 7019640513",
    },
    socials: &[
        SocialLink { label: "GitHub", url: "https://github.com/Pavan7090" },
        SocialLink { label: "LinkedIn", url: "https://linkedin.com/in/pavan-s-178213261" },
        SocialLink { label: "Instagram", url: "https://www.instagram.com/pavangowda.1982/?hl=en" },
        SocialLink { label: "Email", url: "mailto:gowdapavan026@gmail.com" },
    ],
};
